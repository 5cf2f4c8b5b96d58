use tagstyle_lib::{Declaration, StyleBuilder, PROPERTIES};

#[cfg(test)]
pub mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_chained_setters_render_in_call_order() {
        let html = StyleBuilder::new("div", "X")
            .background_color("yellow")
            .border_radius("10px")
            .padding_left("10px")
            .build();

        assert_eq!(
            html,
            r#"<div style="background-color:yellow;border-radius:10px;padding-left:10px;">X</div>"#
        );
    }

    #[test]
    fn test_repeated_property_is_not_overwritten() {
        let html = StyleBuilder::new("p", "hi").color("red").color("blue").build();
        assert_eq!(html, r#"<p style="color:red;color:blue;">hi</p>"#);
    }

    #[test]
    fn test_zero_declarations() {
        let builder = StyleBuilder::new("div", "content");
        assert_eq!(builder.build(), r#"<div style="">content</div>"#);
    }

    #[test]
    fn test_build_is_idempotent_and_reflects_later_appends() {
        let mut builder = StyleBuilder::new("span", "a");
        builder.display("block");

        let first = builder.build();
        let second = builder.build();
        assert_eq!(first, second);
        assert_eq!(builder.len(), 1);

        builder.margin("0");
        assert_eq!(builder.build(), r#"<span style="display:block;margin:0;">a</span>"#);
    }

    #[test]
    fn test_chain_accumulates_into_one_builder() {
        let mut builder = StyleBuilder::new("div", "");
        let returned: *const StyleBuilder = builder.align_items("center");
        assert!(std::ptr::eq(returned, &builder));

        let chained = builder.justify_content("center");
        chained.gap("1em");
        assert_eq!(builder.len(), 3);
    }

    #[test]
    fn test_input_is_not_escaped() {
        let html = StyleBuilder::new("div", "<b>").color("red;\"").build();
        assert_eq!(html, "<div style=\"color:red;\";\"><b></div>");
        assert!(html.contains("<b>"));
        assert!(html.contains("red;\""));
    }

    #[test]
    fn test_original_example_element() {
        let html = StyleBuilder::new("div", "Not visible to other parties")
            .background_color("yellow")
            .border_radius("10px")
            .padding_left("10px")
            .padding_right("10px")
            .color("darkorange")
            .font_size("smaller")
            .display("inline-flex")
            .align_items("center")
            .justify_content("center")
            .build();

        assert_eq!(
            html,
            "<div style=\"background-color:yellow;border-radius:10px;padding-left:10px;\
             padding-right:10px;color:darkorange;font-size:smaller;display:inline-flex;\
             align-items:center;justify-content:center;\">Not visible to other parties</div>"
        );
    }

    #[test]
    fn test_every_property_round_trips_through_set() {
        let mut builder = StyleBuilder::new("div", "");
        for (i, name) in PROPERTIES.iter().enumerate() {
            builder.set(*name, i.to_string());
        }

        assert_eq!(builder.len(), PROPERTIES.len());
        assert!(builder.unknown_properties().is_empty());

        let expected: String = PROPERTIES
            .iter()
            .enumerate()
            .map(|(i, name)| Declaration::new(*name, i.to_string()).to_string())
            .collect();
        assert_eq!(builder.style_attribute(), format!("style=\"{expected}\""));
    }

    #[test]
    fn test_parsed_declarations_extend_builder() {
        let decls: Vec<Declaration> = ["color: red", "width:50%;"]
            .iter()
            .map(|s| s.parse().unwrap())
            .collect();

        let mut builder = StyleBuilder::new("section", "body");
        builder.extend(decls);
        assert_eq!(
            builder.to_string(),
            r#"<section style="color:red;width:50%;">body</section>"#
        );
    }
}
