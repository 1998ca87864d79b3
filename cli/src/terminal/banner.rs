use colored::*;

const BANNER: &str = r#"
     ____   ___  ____  _   _    _    __  __ ____   ___
    |  _ \ / _ \/ ___|| | | |  / \  |  \/  | __ ) / _ \
    | |_) | | | \___ \| |_| | / _ \ | |\/| |  _ \| | | |
    |  _ <| |_| |___) |  _  |/ ___ \| |  | | |_) | |_| |
    |_| \_\\___/|____/|_| |_/_/   \_\_|  |_|____/ \___/
"#;

pub fn art() -> String {
    BANNER.bright_blue().bold().to_string()
}
