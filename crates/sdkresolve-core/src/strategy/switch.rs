//! Nintendo Switch: versioned packages named by `packages.config`, plus
//! the websocket library from the Nintendo SDK.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::domain::{BuildConfiguration, PlatformId, ResolvedDependencySet, StagedFileType};
use crate::layout;
use crate::manifest::{self, MANIFEST_FILE};

use super::builder::{DependencySetBuilder, require_file};
use super::{PlatformStrategy, ResolveContext, StrategyError};

/// Environment variable pointing at the installed Nintendo SDK.
pub const NINTENDO_SDK_ROOT: &str = "NINTENDO_SDK_ROOT";

const PACKAGE_INCLUDE_DIR: &str = "build/native/include";
const PACKAGE_LIB_DIR: &str = "build/native/lib/NX64/release";
const WEBSOCKET_LIB_DIR: &str = "Libraries/NX-NXFP2-a64";
const WEBSOCKET_LIB: &str = "libnn_websocket.a";

/// Library stem inside a versioned package.
struct PackageLibrary {
    sub_path: String,
    stem: &'static str,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SwitchStrategy;

impl SwitchStrategy {
    /// Vendor library tier matching the build configuration.
    pub fn sdk_tier(build: BuildConfiguration) -> &'static str {
        if build.is_release_tier() {
            "Release"
        } else {
            "Develop"
        }
    }

    fn add_package(
        set: &mut DependencySetBuilder,
        root: &Path,
        package: &PackageLibrary,
    ) -> Result<(), StrategyError> {
        let package_root = root.join(&package.sub_path);
        layout::validate(&package_root, [PACKAGE_INCLUDE_DIR, PACKAGE_LIB_DIR])?;

        set.include_dir(package_root.join(PACKAGE_INCLUDE_DIR))?;
        let lib_dir = package_root.join(PACKAGE_LIB_DIR);
        set.link_library(lib_dir.join(format!("{}.nrs", package.stem)))?;
        set.stage(
            lib_dir.join(format!("{}.nro", package.stem)),
            StagedFileType::SystemBinary,
        )?;
        set.stage(
            lib_dir.join(format!("{}.nrr", package.stem)),
            StagedFileType::DebugSymbol,
        )
    }

    fn websocket_library(
        sdk_root: &str,
        build: BuildConfiguration,
    ) -> Result<PathBuf, StrategyError> {
        require_file(
            Path::new(sdk_root)
                .join(WEBSOCKET_LIB_DIR)
                .join(Self::sdk_tier(build))
                .join(WEBSOCKET_LIB),
        )
    }
}

impl PlatformStrategy for SwitchStrategy {
    fn platform(&self) -> PlatformId {
        PlatformId::Switch
    }

    fn is_desktop_class(&self) -> bool {
        false
    }

    fn extra_dependencies(&self) -> Vec<&'static str> {
        vec!["OnlineSubsystemSwitch"]
    }

    fn resolve(&self, ctx: &ResolveContext<'_>) -> Result<ResolvedDependencySet, StrategyError> {
        let root = ctx.root_dir;
        layout::validate(root, std::iter::empty::<&str>())?;

        let packages = manifest::parse(&root.join(MANIFEST_FILE))?;
        debug!(party = %packages.party, multiplayer = %packages.multiplayer, "Resolved package versions");

        let sdk_root = ctx
            .env
            .non_blank_var(NINTENDO_SDK_ROOT)
            .ok_or_else(|| StrategyError::MissingEnvironment(NINTENDO_SDK_ROOT.to_string()))?;

        let mut set = DependencySetBuilder::new();
        for package in [
            PackageLibrary {
                sub_path: packages.party,
                stem: "Party",
            },
            PackageLibrary {
                sub_path: packages.multiplayer,
                stem: "libPlayFabMultiplayer",
            },
        ] {
            Self::add_package(&mut set, root, &package)?;
        }

        set.link_library(Self::websocket_library(&sdk_root, ctx.build_configuration)?)?;

        Ok(set.build())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::LayoutError;
    use crate::manifest::ManifestError;
    use crate::ports::{MapEnvironment, NoExtensions};
    use crate::test_utils::{SWITCH_MULTIPLAYER, SWITCH_PARTY, nintendo_sdk_tree, switch_tree};
    use std::fs;
    use tempfile::tempdir;

    fn resolve(
        root: &Path,
        env: &MapEnvironment,
        build: BuildConfiguration,
    ) -> Result<ResolvedDependencySet, StrategyError> {
        let ctx = ResolveContext {
            root_dir: root,
            env,
            extensions: &NoExtensions,
            build_configuration: build,
        };
        SwitchStrategy.resolve(&ctx)
    }

    fn fixture() -> (tempfile::TempDir, PathBuf, MapEnvironment) {
        let dir = tempdir().unwrap();
        let root = dir.path().join("Switch");
        switch_tree(&root);
        let sdk = nintendo_sdk_tree(&dir.path().join("NintendoSDK"));
        let env = MapEnvironment::new().with(NINTENDO_SDK_ROOT, sdk.to_string_lossy());
        (dir, root, env)
    }

    #[test]
    fn resolves_versioned_package_paths() {
        let (_dir, root, env) = fixture();

        let set = resolve(&root, &env, BuildConfiguration::Development).unwrap();
        assert_eq!(
            set.include_dirs(),
            &[
                root.join(format!("{SWITCH_PARTY}.1.7.16"))
                    .join(PACKAGE_INCLUDE_DIR),
                root.join(format!("{SWITCH_MULTIPLAYER}.1.5.2"))
                    .join(PACKAGE_INCLUDE_DIR),
            ]
        );
        let libs: Vec<_> = set.link_libraries().collect();
        assert_eq!(libs.len(), 3);
        assert!(libs[0].ends_with("Party.nrs"));
        assert!(libs[1].ends_with("libPlayFabMultiplayer.nrs"));
        assert!(libs[2].ends_with("Develop/libnn_websocket.a"));
        assert_eq!(set.runtime_dependencies().len(), 4);
    }

    #[test]
    fn shipping_uses_release_sdk_tier() {
        let (_dir, root, env) = fixture();

        let set = resolve(&root, &env, BuildConfiguration::Shipping).unwrap();
        let websocket = set.link_libraries().last().unwrap().to_path_buf();
        assert!(websocket.ends_with("Release/libnn_websocket.a"));
    }

    #[test]
    fn missing_sdk_root_is_missing_environment() {
        let (_dir, root, mut env) = fixture();
        assert!(resolve(&root, &env, BuildConfiguration::Development).is_ok());

        env.remove(NINTENDO_SDK_ROOT);
        assert!(matches!(
            resolve(&root, &env, BuildConfiguration::Development),
            Err(StrategyError::MissingEnvironment(var)) if var == NINTENDO_SDK_ROOT
        ));
    }

    #[test]
    fn blank_sdk_root_is_missing_environment() {
        let (_dir, root, _) = fixture();
        let env = MapEnvironment::new().with(NINTENDO_SDK_ROOT, "  ");
        assert!(matches!(
            resolve(&root, &env, BuildConfiguration::Development),
            Err(StrategyError::MissingEnvironment(_))
        ));
    }

    #[test]
    fn missing_manifest_is_a_manifest_error() {
        let (_dir, root, env) = fixture();
        fs::remove_file(root.join(MANIFEST_FILE)).unwrap();

        assert!(matches!(
            resolve(&root, &env, BuildConfiguration::Development),
            Err(StrategyError::Manifest(ManifestError::Unreadable { .. }))
        ));
    }

    #[test]
    fn versioned_directories_are_validated_after_substitution() {
        let (_dir, root, env) = fixture();
        let package = root.join(format!("{SWITCH_MULTIPLAYER}.1.5.2"));
        fs::remove_dir_all(package.join("build").join("native").join("lib")).unwrap();

        match resolve(&root, &env, BuildConfiguration::Development) {
            Err(StrategyError::Layout(LayoutError::Missing { root: reported, missing })) => {
                assert_eq!(reported, package);
                assert!(missing.contains(PACKAGE_LIB_DIR));
                assert!(!missing.contains(PACKAGE_INCLUDE_DIR));
            }
            other => panic!("expected layout error, got {other:?}"),
        }
    }

    #[test]
    fn manifest_version_without_matching_directory_fails() {
        let (_dir, root, env) = fixture();
        let manifest = fs::read_to_string(root.join(MANIFEST_FILE))
            .unwrap()
            .replace("1.7.16", "1.8.0");
        fs::write(root.join(MANIFEST_FILE), manifest).unwrap();

        assert!(matches!(
            resolve(&root, &env, BuildConfiguration::Development),
            Err(StrategyError::Layout(LayoutError::RootNotFound(_)))
        ));
    }

    #[test]
    fn missing_websocket_library_is_reported() {
        let (dir, root, env) = fixture();
        fs::remove_dir_all(dir.path().join("NintendoSDK").join("Libraries")).unwrap();

        assert!(matches!(
            resolve(&root, &env, BuildConfiguration::Development),
            Err(StrategyError::DependencyNotFound(what)) if what.contains(WEBSOCKET_LIB)
        ));
    }

    #[test]
    fn sdk_tier_follows_build_configuration() {
        assert_eq!(SwitchStrategy::sdk_tier(BuildConfiguration::Test), "Release");
        assert_eq!(SwitchStrategy::sdk_tier(BuildConfiguration::Debug), "Develop");
    }
}
