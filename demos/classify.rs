//! Classify HTTP status codes with a reusable switch expression

use switch_expr::{Switch, SwitchConfig};

fn main() {
    env_logger::init();

    let config = SwitchConfig::default().debug().capacity(3, 4);
    let classify = match Switch::configured(&config) {
        Ok(builder) => builder
            .default_case(|code: &u16| format!("{code}: unknown"))
            .single(200, |_| "200: ok".to_string())
            .single(404, |_| "404: not found".to_string())
            .single(418, |_| "418: teapot".to_string())
            .predicate(
                |code| (100..200).contains(code),
                |code| format!("{code}: informational"),
            )
            .predicate(
                |code| (200..300).contains(code),
                |code| format!("{code}: success"),
            )
            .predicate(
                |code| (300..400).contains(code),
                |code| format!("{code}: redirect"),
            )
            .predicate(
                |code| (400..600).contains(code),
                |code| format!("{code}: error"),
            )
            .build(),
        Err(error) => {
            eprintln!("invalid switch configuration: {error}");
            return;
        }
    };

    let codes = [101, 200, 204, 301, 404, 418, 503, 799];
    for line in classify.resolve_all(codes) {
        println!("{line}");
    }
}
