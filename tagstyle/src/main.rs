use clap::Parser;
use log::{info, warn};
use tagstyle_lib::{Declaration, StyleBuilder};

const TAGSTYLE_INTRO: &str = r#"
   __                   __        __
  / /_____ ____ _ ___ _/ /___ __ / /__
 / __/ _ `/ _ `/(_-</ __/ // // / / -_)
 \__/\_,_/\_, //___/\__/\_, //_/\__/
         /___/         /___/

 Render one HTML element with inline CSS.
"#;

const DEFAULT_CONTENT: &str = "Not visible to other parties";

#[derive(Parser)]
#[command(name = "tagstyle")]
#[command(about = "Render an HTML element with an inline style attribute")]
#[command(before_help = TAGSTYLE_INTRO)]
struct Args {
    /// Element tag name.
    #[arg(long, default_value = "div")]
    tag: String,

    /// Text or markup placed inside the element.
    #[arg(long, default_value = DEFAULT_CONTENT)]
    content: String,

    /// Declaration as `property:value`, repeatable. Without any, the demo styling is used.
    #[arg(short, long = "style", value_name = "PROP:VALUE")]
    styles: Vec<Declaration>,

    /// Fail on properties that have no typed setter instead of warning.
    #[arg(long)]
    strict: bool,
}

/// The badge from the library's usage example.
fn demo(builder: &mut StyleBuilder) {
    builder
        .background_color("yellow")
        .border_radius("10px")
        .padding_left("10px")
        .padding_right("10px")
        .color("darkorange")
        .font_size("smaller")
        .display("inline-flex")
        .align_items("center")
        .justify_content("center");
}

/// Renders the element described by `args`, or lists the unknown properties under `--strict`.
fn run(args: Args) -> Result<String, String> {
    let mut builder = StyleBuilder::new(args.tag, args.content);
    if args.styles.is_empty() {
        info!("no --style given, using the demo declarations");
        demo(&mut builder);
    } else {
        builder.extend(args.styles);
    }

    let unknown = builder.unknown_properties();
    if !unknown.is_empty() {
        if args.strict {
            return Err(format!("Unknown CSS properties: {}", unknown.join(", ")));
        }
        for property in unknown {
            warn!("'{}' has no typed setter, passing it through", property);
        }
    }

    Ok(builder.build())
}

fn main() {
    env_logger::init();

    // parse the args given in terminal
    let args: Args = Args::parse();

    match run(args) {
        Ok(html) => println!("{}", html),
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_without_styles() {
        let html = run(Args::parse_from(["tagstyle"])).unwrap();
        assert_eq!(
            html,
            "<div style=\"background-color:yellow;border-radius:10px;padding-left:10px;\
             padding-right:10px;color:darkorange;font-size:smaller;display:inline-flex;\
             align-items:center;justify-content:center;\">Not visible to other parties</div>"
        );
    }

    #[test]
    fn test_styles_replace_demo_and_keep_order() {
        let args = Args::parse_from([
            "tagstyle", "--tag", "span", "-s", "color:red", "--style", "color: blue;",
        ]);
        assert_eq!(
            run(args).unwrap(),
            r#"<span style="color:red;color:blue;">Not visible to other parties</span>"#
        );
    }

    #[test]
    fn test_strict_rejects_unknown_property() {
        let args = Args::parse_from(["tagstyle", "--strict", "-s", "colour:red", "-s", "color:red"]);
        assert_eq!(run(args), Err("Unknown CSS properties: colour".to_string()));
    }

    #[test]
    fn test_unknown_property_renders_without_strict() {
        let args = Args::parse_from(["tagstyle", "--content", "x", "-s", "colour:red"]);
        assert_eq!(run(args).unwrap(), r#"<div style="colour:red;">x</div>"#);
    }

    #[test]
    fn test_malformed_style_is_rejected() {
        assert!(Args::try_parse_from(["tagstyle", "-s", "color"]).is_err());
    }
}
