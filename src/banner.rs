// src/banner.rs

/// Prints the application startup banner to the console.
pub fn print_banner() {
    let banner = r#"
                 _               _           _
  ___ ___   __| | ___         (_)_   _  __| | __ _  ___
 / __/ _ \ / _` |/ _ \_____   | | | | |/ _` |/ _` |/ _ \
| (_| (_) | (_| |  __/_____|  | | |_| | (_| | (_| |  __/
 \___\___/ \__,_|\___|       _/ |\__,_|\__,_|\__, |\___|
                            |__/             |___/

    AI Code Review & Scoring Service
"#;
    println!("{}", banner);
}
