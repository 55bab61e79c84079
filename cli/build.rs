/*
 * SPDX-FileCopyrightText: 2023 Tommaso Fontana
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use std::io::Write;
use std::path::PathBuf;

fn main() {
    built::write_built_file().expect("Failed to acquire build-time information");

    let built_file: PathBuf = [
        std::env::var("OUT_DIR").expect("OUT_DIR is not set"),
        "built.rs".to_owned(),
    ]
    .iter()
    .collect();
    let mut file = std::fs::OpenOptions::new()
        .append(true)
        .open(&built_file)
        .expect("Could not open the build-information file");
    writeln!(
        file,
        "/// The build date, in ISO 8601 format.\n#[allow(dead_code)]\npub const BUILD_DATE: &str = \"{}\";",
        chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
    )
    .expect("Could not write the build date");
}
