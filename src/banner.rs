// src/banner.rs

/// Prints the application startup banner to the console.
pub fn print_banner() {
    let banner = r#"
  ____ ____   ____   _____         _     ____  _                  _
 / ___| __ ) / ___| |_   _|__  ___| |_  / ___|| |_ __ _ _ __   __| |
| |   |  _ \| |       | |/ _ \/ __| __| \___ \| __/ _` | '_ \ / _` |
| |___| |_) | |___    | |  __/\__ \ |_   ___) | || (_| | | | | (_| |
 \____|____/ \____|   |_|\___||___/\__| |____/ \__\__,_|_| |_|\__,_|

    GLIB Control Panel
"#;
    println!("{}", banner);
}
