//! Lookup of compiled contracts by name

use std::{
    fs,
    path::{Path, PathBuf},
};

use alloy::{
    hex,
    primitives::Bytes,
    sol_types::{abi::TokenSeq, SolType, SolValue},
};
use json::JsonValue;

use crate::errors::ScriptError;

/// Compiled bytecode of a contract, ready to be deployed with constructor arguments
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContractFactory {
    /// Name the contract was looked up with
    name: String,
    /// Creation bytecode
    bytecode: Bytes,
}

impl ContractFactory {
    /// Build a factory from already decoded creation bytecode
    pub fn new(name: impl Into<String>, bytecode: impl Into<Bytes>) -> Self {
        Self {
            name: name.into(),
            bytecode: bytecode.into(),
        }
    }

    /// Name of the contract
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Creation bytecode, without constructor arguments
    pub fn bytecode(&self) -> &Bytes {
        &self.bytecode
    }

    /// Creation bytecode followed by the abi encoded constructor arguments
    pub fn deploy_code<T>(&self, constructor_args: T) -> Bytes
    where
        T: SolValue,
        for<'a> <<T as SolValue>::SolType as SolType>::Token<'a>: TokenSeq<'a>,
    {
        let mut code = self.bytecode.to_vec();
        code.extend_from_slice(&constructor_args.abi_encode_params());
        Bytes::from(code)
    }
}

/// Resolves a compiled contract by its name
pub trait ContractLookup {
    /// Find the compiled contract called `name`
    fn get_contract_factory(&self, name: &str) -> Result<ContractFactory, ScriptError>;
}

/// In-memory set of factories, matched on their name
impl ContractLookup for [ContractFactory] {
    fn get_contract_factory(&self, name: &str) -> Result<ContractFactory, ScriptError> {
        self.iter()
            .find(|factory| factory.name == name)
            .cloned()
            .ok_or_else(|| ScriptError::ArtifactLookup(format!("no artifact for {name}")))
    }
}

/// A directory of compiled contract artifacts.
///
/// Both the Hardhat layout (`artifacts/contracts/Foo.sol/Foo.json`, with a hex
/// `bytecode` string) and the Foundry layout (`out/Foo.sol/Foo.json`, with
/// `bytecode.object`) are understood.
#[derive(Debug, Clone)]
pub struct ArtifactStore {
    /// Directory searched for artifacts
    root: PathBuf,
}

impl ArtifactStore {
    /// Open the artifacts directory at `root`
    pub fn open(root: impl Into<PathBuf>) -> Result<Self, ScriptError> {
        let root = root.into();
        if !root.is_dir() {
            return Err(ScriptError::ArtifactLookup(format!(
                "artifacts directory {} not found",
                root.display()
            )));
        }
        Ok(Self { root })
    }
}

impl ContractLookup for ArtifactStore {
    fn get_contract_factory(&self, name: &str) -> Result<ContractFactory, ScriptError> {
        let file_name = format!("{name}.json");
        let mut matches = Vec::new();
        find_files(&self.root, &file_name, &mut matches)?;

        let artifact_path = match matches.as_slice() {
            [] => {
                return Err(ScriptError::ArtifactLookup(format!(
                    "no artifact for {name} under {}",
                    self.root.display()
                )))
            }
            [path] => path.clone(),
            paths => {
                let paths = paths
                    .iter()
                    .map(|path| path.display().to_string())
                    .collect::<Vec<_>>()
                    .join(", ");
                return Err(ScriptError::ArtifactLookup(format!(
                    "multiple artifacts for {name}: {paths}"
                )));
            }
        };

        let contents = fs::read_to_string(&artifact_path)
            .map_err(|e| ScriptError::ArtifactLookup(e.to_string()))?;
        let artifact =
            json::parse(&contents).map_err(|e| ScriptError::ArtifactLookup(e.to_string()))?;

        let bytecode = read_bytecode(&artifact).ok_or_else(|| {
            ScriptError::ArtifactLookup(format!(
                "{} has no bytecode field",
                artifact_path.display()
            ))
        })?;
        let bytecode = hex::decode(bytecode)
            .map_err(|e| ScriptError::ArtifactLookup(format!("{name} bytecode: {e}")))?;
        // Interfaces and abstract contracts compile to empty bytecode
        if bytecode.is_empty() {
            return Err(ScriptError::ArtifactLookup(format!(
                "{name} is not deployable (empty bytecode)"
            )));
        }

        Ok(ContractFactory::new(name, bytecode))
    }
}

/// Extract the creation bytecode from either artifact flavour
fn read_bytecode(artifact: &JsonValue) -> Option<&str> {
    let bytecode = &artifact["bytecode"];
    bytecode.as_str().or_else(|| bytecode["object"].as_str())
}

/// Collect every file called `file_name` under `dir`.
///
/// Symlinks are not followed.
fn find_files(dir: &Path, file_name: &str, found: &mut Vec<PathBuf>) -> Result<(), ScriptError> {
    let mut entries = fs::read_dir(dir)
        .map_err(|e| ScriptError::ArtifactLookup(e.to_string()))?
        .filter_map(|entry| {
            let entry = entry.ok()?;
            Some((entry.path(), entry.file_type().ok()?))
        })
        .collect::<Vec<_>>();
    entries.sort_by(|(a, _), (b, _)| a.cmp(b));

    for (path, file_type) in entries {
        if file_type.is_dir() {
            find_files(&path, file_name, found)?;
        } else if file_type.is_file() && path.file_name().is_some_and(|name| name == file_name) {
            found.push(path);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use alloy::primitives::{Address, U256};

    use super::*;

    fn write_artifact(root: &Path, relative: &str, contents: &str) {
        let path = root.join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, contents).unwrap();
    }

    #[test]
    fn finds_hardhat_artifact() {
        let dir = tempfile::tempdir().unwrap();
        write_artifact(
            dir.path(),
            "contracts/SocialToken.sol/SocialToken.dbg.json",
            r#"{"buildInfo": "../../build-info/abc.json"}"#,
        );
        write_artifact(
            dir.path(),
            "contracts/SocialToken.sol/SocialToken.json",
            r#"{"contractName": "SocialToken", "bytecode": "0x6080604052"}"#,
        );

        let store = ArtifactStore::open(dir.path()).unwrap();
        let factory = store.get_contract_factory("SocialToken").unwrap();

        assert_eq!(factory.name(), "SocialToken");
        assert_eq!(factory.bytecode().to_vec(), vec![0x60, 0x80, 0x60, 0x40, 0x52]);
    }

    #[test]
    fn finds_foundry_artifact() {
        let dir = tempfile::tempdir().unwrap();
        write_artifact(
            dir.path(),
            "SocialMediaContract.sol/SocialMediaContract.json",
            r#"{"bytecode": {"object": "0x6001", "linkReferences": {}}}"#,
        );

        let store = ArtifactStore::open(dir.path()).unwrap();
        let factory = store.get_contract_factory("SocialMediaContract").unwrap();

        assert_eq!(factory.bytecode().to_vec(), vec![0x60, 0x01]);
    }

    #[test]
    fn missing_or_empty_artifacts_are_errors() {
        let dir = tempfile::tempdir().unwrap();
        write_artifact(
            dir.path(),
            "contracts/IRewards.sol/IRewards.json",
            r#"{"bytecode": "0x"}"#,
        );
        let store = ArtifactStore::open(dir.path()).unwrap();

        assert!(matches!(
            store.get_contract_factory("SocialToken"),
            Err(ScriptError::ArtifactLookup(_))
        ));
        assert!(matches!(
            store.get_contract_factory("IRewards"),
            Err(ScriptError::ArtifactLookup(_))
        ));
        assert!(ArtifactStore::open(dir.path().join("nope")).is_err());
    }

    #[test]
    fn same_named_artifacts_are_ambiguous() {
        let dir = tempfile::tempdir().unwrap();
        write_artifact(
            dir.path(),
            "contracts/a/SocialToken.sol/SocialToken.json",
            r#"{"bytecode": "0x01"}"#,
        );
        write_artifact(
            dir.path(),
            "contracts/b/SocialToken.sol/SocialToken.json",
            r#"{"bytecode": "0x02"}"#,
        );
        let store = ArtifactStore::open(dir.path()).unwrap();

        let Err(ScriptError::ArtifactLookup(message)) = store.get_contract_factory("SocialToken")
        else {
            panic!("expected an ambiguous lookup error");
        };
        assert!(message.contains("multiple artifacts for SocialToken"));
    }

    #[cfg(unix)]
    #[test]
    fn symlinked_directories_are_not_followed() {
        let dir = tempfile::tempdir().unwrap();
        write_artifact(
            dir.path(),
            "contracts/SocialToken.sol/SocialToken.json",
            r#"{"bytecode": "0x6001"}"#,
        );
        // A loop back to the root
        std::os::unix::fs::symlink(dir.path(), dir.path().join("contracts/loop")).unwrap();

        let store = ArtifactStore::open(dir.path()).unwrap();
        let factory = store.get_contract_factory("SocialToken").unwrap();

        assert_eq!(factory.bytecode().to_vec(), vec![0x60, 0x01]);
    }

    #[test]
    fn deploy_code_appends_constructor_args() {
        let factory = ContractFactory::new("SocialToken", vec![0xaa, 0xbb]);
        let holder = Address::repeat_byte(0x11);

        let code = factory.deploy_code((U256::from(1_000_000u64), holder));

        assert_eq!(code.len(), 2 + 64);
        assert_eq!(&code[..2], &[0xaa, 0xbb]);
        assert_eq!(U256::from_be_slice(&code[2..34]), U256::from(1_000_000u64));
        assert_eq!(Address::from_slice(&code[46..66]), holder);
    }
}
