//! On-disk fixtures: a plugin checkout with per-platform artifact trees,
//! a Nintendo SDK root and a GDK extension SDK directory.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use sdkresolve_core::{PlatformId, platform_root};
use tempfile::TempDir;

pub const SWITCH_PARTY_VERSION: &str = "1.7.16";
pub const SWITCH_MULTIPLAYER_VERSION: &str = "1.5.2";

fn touch(dir: &Path, files: &[&str]) {
    fs::create_dir_all(dir).expect("create fixture dir");
    for file in files {
        fs::write(dir.join(file), b"stub").expect("write fixture file");
    }
}

/// A temporary plugin checkout plus sibling host directories.
pub struct Workspace {
    dir: TempDir,
}

impl Workspace {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("create temp dir"),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn plugin_dir(&self) -> PathBuf {
        self.path().join("OnlineSubsystemPlayFab")
    }

    pub fn root(&self, platform: PlatformId) -> PathBuf {
        platform_root(&self.plugin_dir(), platform)
    }

    pub fn nintendo_sdk(&self) -> PathBuf {
        self.path().join("NintendoSDK")
    }

    pub fn extensions_dir(&self) -> PathBuf {
        self.path().join("ExtensionSDKs")
    }

    /// Lay out the Windows desktop tree.
    #[must_use]
    pub fn with_windows(self) -> Self {
        let root = self.root(PlatformId::Win64);
        fs::create_dir_all(root.join("Include")).expect("create include dir");
        touch(&root.join("Lib"), &["Party.lib", "PlayFabMultiplayerWin.lib"]);
        touch(
            &root.join("Redist"),
            &[
                "PartyWin.dll",
                "PartyWin.pdb",
                "PlayFabMultiplayerWin.dll",
                "PlayFabMultiplayerWin.pdb",
            ],
        );
        self
    }

    /// Lay out the GDK override tree shared by every GDK platform.
    #[must_use]
    pub fn with_gdk_override(self) -> Self {
        let root = self.root(PlatformId::XSX);
        fs::create_dir_all(root.join("Include")).expect("create include dir");
        touch(
            &root.join("Lib"),
            &["Party.lib", "PartyXboxLive.lib", "PlayFabMultiplayerGDK.lib"],
        );
        touch(
            &root.join("Redist"),
            &[
                "Party.dll",
                "Party.pdb",
                "PartyXboxLive.dll",
                "PartyXboxLive.pdb",
                "PlayFabMultiplayerGDK.dll",
                "PlayFabMultiplayerGDK.pdb",
            ],
        );
        self
    }

    /// Install the core GDK extension SDKs and XCurl on the host.
    #[must_use]
    pub fn with_gdk_extensions(self) -> Self {
        let ext = self.extensions_dir();
        for (name, stem) in [
            ("PlayFab.Party.Cpp", "Party"),
            ("PlayFab.PartyXboxLive.Cpp", "PartyXboxLive"),
            ("PlayFab.Multiplayer.Cpp", "PlayFabMultiplayerGDK"),
        ] {
            let dir = ext.join(name);
            fs::create_dir_all(dir.join("Include")).expect("create include dir");
            touch(&dir.join("Lib"), &[&format!("{stem}.lib")]);
            touch(
                &dir.join("Redist"),
                &[&format!("{stem}.dll"), &format!("{stem}.pdb")],
            );
        }
        touch(&ext.join("Xbox.XCurl.API").join("Redist"), &["XCurl.dll", "XCurl.pdb"]);
        self
    }

    /// Lay out the Switch tree with its manifest, plus the Nintendo SDK.
    #[must_use]
    pub fn with_switch(self) -> Self {
        let root = self.root(PlatformId::Switch);
        fs::create_dir_all(&root).expect("create switch root");
        fs::write(
            root.join("packages.config"),
            format!(
                "<?xml version=\"1.0\" encoding=\"utf-8\"?>\n<packages>\n  \
                 <package id=\"Microsoft.PlayFab.PlayFabParty.Cpp.Switch\" \
                 version=\"{SWITCH_PARTY_VERSION}\" targetFramework=\"native\" />\n  \
                 <package id=\"Microsoft.PlayFab.Multiplayer.Cpp.Switch\" \
                 version=\"{SWITCH_MULTIPLAYER_VERSION}\" targetFramework=\"native\" />\n\
                 </packages>\n"
            ),
        )
        .expect("write manifest");

        for (package, version, stem) in [
            ("Microsoft.PlayFab.PlayFabParty.Cpp.Switch", SWITCH_PARTY_VERSION, "Party"),
            (
                "Microsoft.PlayFab.Multiplayer.Cpp.Switch",
                SWITCH_MULTIPLAYER_VERSION,
                "libPlayFabMultiplayer",
            ),
        ] {
            let native = root.join(format!("{package}.{version}")).join("build").join("native");
            fs::create_dir_all(native.join("include")).expect("create include dir");
            touch(
                &native.join("lib").join("NX64").join("release"),
                &[
                    &format!("{stem}.nrs"),
                    &format!("{stem}.nro"),
                    &format!("{stem}.nrr"),
                ],
            );
        }

        for tier in ["Release", "Develop"] {
            touch(
                &self
                    .nintendo_sdk()
                    .join("Libraries")
                    .join("NX-NXFP2-a64")
                    .join(tier),
                &["libnn_websocket.a"],
            );
        }
        self
    }

    /// Every platform's tree and host SDK in one checkout.
    #[must_use]
    pub fn complete() -> Self {
        Self::new()
            .with_windows()
            .with_gdk_override()
            .with_gdk_extensions()
            .with_switch()
    }
}
