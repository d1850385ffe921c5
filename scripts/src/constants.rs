//! Constants used in the deploy scripts

/// Default RPC endpoint, a local development node
pub const DEFAULT_RPC: &str = "http://127.0.0.1:8545";

/// Default directory holding the compiled contract artifacts
pub const DEFAULT_ARTIFACTS_DIR: &str = "artifacts";

/// Default path of the deployment record
pub const DEFAULT_OUTPUT_FILE: &str = "deployed.json";

/// Name of the token contract artifact
pub const SOCIAL_TOKEN: &str = "SocialToken";

/// Name of the rewards contract artifact
pub const SOCIAL_MEDIA_CONTRACT: &str = "SocialMediaContract";

/// Maximum token supply, in whole tokens
pub const MAX_SUPPLY: u64 = 1_000_000;

/// Tokens credited per post
pub const POST_REWARD: u64 = 5;

/// Tokens credited per like
pub const LIKE_REWARD: u64 = 1;

/// Tokens credited per comment
pub const COMMENT_REWARD: u64 = 2;

/// Initial allocation moved to the rewards contract (50% of the max supply)
pub const TRANSFER_AMOUNT: &str = "500000";

/// Decimals of the token
pub const TOKEN_DECIMALS: u8 = 18;

/// Key of the initial allocation transfer inside the deployment record
pub const INITIAL_ALLOCATION_TX: &str = "initialAllocation";
