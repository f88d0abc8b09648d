use colored::*;

use crate::terminal::print;

const BANNER: &str = r#"
   ___  ___ __ _ _ ____   _____ _ __   __ _  ___ _ __
  / __|/ __/ _` | '_ \ \ / / _ \ '_ \ / _` |/ _ \ '__|
  \__ \ (_| (_| | | | \ V /  __/ | | | (_| |  __/ |
  |___/\___\__,_|_| |_|\_/ \___|_| |_|\__, |\___|_|
                                       |___/
"#;

pub fn print() {
    print::print(&format!("{}", BANNER.bright_green()));
}
