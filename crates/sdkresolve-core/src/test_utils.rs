//! On-disk SDK fixtures for strategy and resolver tests.
//!
//! Each helper lays out a vendor tree under a caller-owned `tempdir`.

use std::fs;
use std::path::{Path, PathBuf};

/// Create `dir` and an empty file for each name in it.
pub fn touch_all(dir: &Path, files: &[&str]) {
    fs::create_dir_all(dir).unwrap();
    for file in files {
        fs::write(dir.join(file), b"stub").unwrap();
    }
}

/// Lay out a complete Windows desktop root.
pub fn windows_tree(root: &Path) {
    fs::create_dir_all(root.join("Include")).unwrap();
    touch_all(&root.join("Lib"), &["Party.lib", "PlayFabMultiplayerWin.lib"]);
    touch_all(
        &root.join("Redist"),
        &[
            "PartyWin.dll",
            "PartyWin.pdb",
            "PlayFabMultiplayerWin.dll",
            "PlayFabMultiplayerWin.pdb",
        ],
    );
}

/// Lay out a complete GDK override root.
pub fn gdk_tree(root: &Path) {
    fs::create_dir_all(root.join("Include")).unwrap();
    touch_all(
        &root.join("Lib"),
        &["Party.lib", "PartyXboxLive.lib", "PlayFabMultiplayerGDK.lib"],
    );
    touch_all(
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
}

pub const SWITCH_PARTY: &str = "Microsoft.PlayFab.PlayFabParty.Cpp.Switch";
pub const SWITCH_MULTIPLAYER: &str = "Microsoft.PlayFab.Multiplayer.Cpp.Switch";

/// Lay out a Switch root with a manifest and both versioned packages.
pub fn switch_tree(root: &Path) {
    fs::create_dir_all(root).unwrap();
    fs::write(
        root.join("packages.config"),
        format!(
            "<?xml version=\"1.0\" encoding=\"utf-8\"?>\n<packages>\n  \
             <package id=\"{SWITCH_PARTY}\" version=\"1.7.16\" targetFramework=\"native\" />\n  \
             <package id=\"{SWITCH_MULTIPLAYER}\" version=\"1.5.2\" targetFramework=\"native\" />\n\
             </packages>\n"
        ),
    )
    .unwrap();

    let party = root.join(format!("{SWITCH_PARTY}.1.7.16")).join("build").join("native");
    fs::create_dir_all(party.join("include")).unwrap();
    touch_all(
        &party.join("lib").join("NX64").join("release"),
        &["Party.nrs", "Party.nro", "Party.nrr"],
    );

    let multiplayer = root
        .join(format!("{SWITCH_MULTIPLAYER}.1.5.2"))
        .join("build")
        .join("native");
    fs::create_dir_all(multiplayer.join("include")).unwrap();
    touch_all(
        &multiplayer.join("lib").join("NX64").join("release"),
        &[
            "libPlayFabMultiplayer.nrs",
            "libPlayFabMultiplayer.nro",
            "libPlayFabMultiplayer.nrr",
        ],
    );
}

/// Lay out a Nintendo SDK root with both websocket library tiers.
pub fn nintendo_sdk_tree(root: &Path) -> PathBuf {
    for tier in ["Release", "Develop"] {
        touch_all(
            &root.join("Libraries").join("NX-NXFP2-a64").join(tier),
            &["libnn_websocket.a"],
        );
    }
    root.to_path_buf()
}

/// Lay out one GDK extension SDK with development and redist files.
pub fn gdk_extension(root: &Path, name: &str, libs: &[&str], redist: &[&str]) -> PathBuf {
    let ext = root.join(name);
    fs::create_dir_all(ext.join("Include")).unwrap();
    touch_all(&ext.join("Lib"), libs);
    touch_all(&ext.join("Redist"), redist);
    ext
}
