//! Banner and header printing.

/// Inner width of the banner box in characters
const WIDTH: usize = 38;

const TITLE: &str = "qr2cad";
const TAGLINE: &str = "QR codes to printable models";

/// Print the application banner.
pub fn print_banner() {
    let border = "═".repeat(WIDTH);
    println!("\n\x1b[1;36m╔{}╗\x1b[0m", border);
    println!("\x1b[1;36m║\x1b[0m\x1b[1m{}\x1b[0m\x1b[1;36m║\x1b[0m", centered(TITLE));
    println!("\x1b[1;36m║\x1b[0m{}\x1b[1;36m║\x1b[0m", centered(TAGLINE));
    println!("\x1b[1;36m╚{}╝\x1b[0m\n", border);
}

fn centered(text: &str) -> String {
    format!("{:^width$}", text, width = WIDTH)
}
