//! ABI of the deployed contracts

use alloy::sol;

sol! {
#[sol(rpc)]
interface ISocialToken {
    function totalSupply() external view returns (uint256);

    function balanceOf(address account) external view returns (uint256);

    function transfer(address to, uint256 amount) external returns (bool);
}

}
