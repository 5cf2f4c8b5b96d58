//! The CSS property table behind the typed setters on [`StyleBuilder`].
//!
//! Every entry maps a setter name to the kebab-case property it appends. The
//! same table produces [`PROPERTIES`], kept in byte order so lookups can
//! binary search it.

use crate::tag_builder::StyleBuilder;

macro_rules! css_properties {
    (
        $(
            $(#[$attr:meta])*
            $name:ident: $css:literal;
        )*
    ) => {
        #[rustfmt::skip]
        impl StyleBuilder {
            $(
                $(#[$attr])*
                pub fn $name(&mut self, value: impl Into<String>) -> &mut Self {
                    self.set($css, value)
                }
            )*
        }

        /// Every property that has a typed setter, in byte order.
        pub const PROPERTIES: &[&str] = &[$($css),*];
    };
}

/// True if `name` is one of the properties with a typed setter.
///
/// The match is exact and case-sensitive. Custom properties (`--*`) are never known.
pub fn is_known_property(name: &str) -> bool {
    PROPERTIES.binary_search(&name).is_ok()
}

css_properties! {
    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/align-content>
    align_content: "align-content";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/align-items>
    align_items: "align-items";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/align-self>
    align_self: "align-self";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/all>
    all: "all";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/animation>
    animation: "animation";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/animation-delay>
    animation_delay: "animation-delay";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/animation-direction>
    animation_direction: "animation-direction";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/animation-duration>
    animation_duration: "animation-duration";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/animation-fill-mode>
    animation_fill_mode: "animation-fill-mode";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/animation-iteration-count>
    animation_iteration_count: "animation-iteration-count";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/animation-name>
    animation_name: "animation-name";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/animation-play-state>
    animation_play_state: "animation-play-state";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/animation-timing-function>
    animation_timing_function: "animation-timing-function";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/aspect-ratio>
    aspect_ratio: "aspect-ratio";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/backdrop-filter>
    backdrop_filter: "backdrop-filter";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/backface-visibility>
    backface_visibility: "backface-visibility";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/background>
    background: "background";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/background-attachment>
    background_attachment: "background-attachment";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/background-blend-mode>
    background_blend_mode: "background-blend-mode";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/background-clip>
    background_clip: "background-clip";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/background-color>
    background_color: "background-color";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/background-image>
    background_image: "background-image";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/background-origin>
    background_origin: "background-origin";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/background-position>
    background_position: "background-position";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/background-repeat>
    background_repeat: "background-repeat";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/background-size>
    background_size: "background-size";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/block-size>
    block_size: "block-size";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/border>
    border: "border";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/border-block>
    border_block: "border-block";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/border-block-color>
    border_block_color: "border-block-color";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/border-block-end>
    border_block_end: "border-block-end";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/border-block-end-color>
    border_block_end_color: "border-block-end-color";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/border-block-end-style>
    border_block_end_style: "border-block-end-style";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/border-block-end-width>
    border_block_end_width: "border-block-end-width";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/border-block-start>
    border_block_start: "border-block-start";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/border-block-start-color>
    border_block_start_color: "border-block-start-color";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/border-block-start-style>
    border_block_start_style: "border-block-start-style";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/border-block-start-width>
    border_block_start_width: "border-block-start-width";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/border-block-style>
    border_block_style: "border-block-style";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/border-block-width>
    border_block_width: "border-block-width";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/border-bottom>
    border_bottom: "border-bottom";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/border-bottom-color>
    border_bottom_color: "border-bottom-color";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/border-bottom-left-radius>
    border_bottom_left_radius: "border-bottom-left-radius";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/border-bottom-right-radius>
    border_bottom_right_radius: "border-bottom-right-radius";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/border-bottom-style>
    border_bottom_style: "border-bottom-style";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/border-bottom-width>
    border_bottom_width: "border-bottom-width";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/border-collapse>
    border_collapse: "border-collapse";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/border-color>
    border_color: "border-color";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/border-end-end-radius>
    border_end_end_radius: "border-end-end-radius";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/border-end-start-radius>
    border_end_start_radius: "border-end-start-radius";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/border-image>
    border_image: "border-image";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/border-image-outset>
    border_image_outset: "border-image-outset";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/border-image-repeat>
    border_image_repeat: "border-image-repeat";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/border-image-slice>
    border_image_slice: "border-image-slice";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/border-image-source>
    border_image_source: "border-image-source";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/border-image-width>
    border_image_width: "border-image-width";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/border-inline>
    border_inline: "border-inline";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/border-inline-color>
    border_inline_color: "border-inline-color";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/border-inline-end>
    border_inline_end: "border-inline-end";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/border-inline-end-color>
    border_inline_end_color: "border-inline-end-color";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/border-inline-end-style>
    border_inline_end_style: "border-inline-end-style";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/border-inline-end-width>
    border_inline_end_width: "border-inline-end-width";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/border-inline-start>
    border_inline_start: "border-inline-start";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/border-inline-start-color>
    border_inline_start_color: "border-inline-start-color";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/border-inline-start-style>
    border_inline_start_style: "border-inline-start-style";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/border-inline-start-width>
    border_inline_start_width: "border-inline-start-width";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/border-inline-style>
    border_inline_style: "border-inline-style";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/border-inline-width>
    border_inline_width: "border-inline-width";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/border-left>
    border_left: "border-left";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/border-left-color>
    border_left_color: "border-left-color";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/border-left-style>
    border_left_style: "border-left-style";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/border-left-width>
    border_left_width: "border-left-width";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/border-radius>
    border_radius: "border-radius";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/border-right>
    border_right: "border-right";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/border-right-color>
    border_right_color: "border-right-color";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/border-right-style>
    border_right_style: "border-right-style";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/border-right-width>
    border_right_width: "border-right-width";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/border-spacing>
    border_spacing: "border-spacing";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/border-start-end-radius>
    border_start_end_radius: "border-start-end-radius";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/border-start-start-radius>
    border_start_start_radius: "border-start-start-radius";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/border-style>
    border_style: "border-style";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/border-top>
    border_top: "border-top";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/border-top-color>
    border_top_color: "border-top-color";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/border-top-left-radius>
    border_top_left_radius: "border-top-left-radius";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/border-top-right-radius>
    border_top_right_radius: "border-top-right-radius";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/border-top-style>
    border_top_style: "border-top-style";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/border-top-width>
    border_top_width: "border-top-width";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/border-width>
    border_width: "border-width";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/bottom>
    bottom: "bottom";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/box-decoration-break>
    box_decoration_break: "box-decoration-break";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/box-shadow>
    box_shadow: "box-shadow";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/box-sizing>
    box_sizing: "box-sizing";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/break-after>
    break_after: "break-after";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/break-before>
    break_before: "break-before";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/break-inside>
    break_inside: "break-inside";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/caption-side>
    caption_side: "caption-side";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/caret-color>
    caret_color: "caret-color";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/clear>
    clear: "clear";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/clip>
    clip: "clip";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/clip-path>
    clip_path: "clip-path";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/color>
    color: "color";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/column-count>
    column_count: "column-count";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/column-fill>
    column_fill: "column-fill";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/column-gap>
    column_gap: "column-gap";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/column-rule>
    column_rule: "column-rule";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/column-rule-color>
    column_rule_color: "column-rule-color";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/column-rule-style>
    column_rule_style: "column-rule-style";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/column-rule-width>
    column_rule_width: "column-rule-width";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/column-span>
    column_span: "column-span";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/column-width>
    column_width: "column-width";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/columns>
    columns: "columns";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/content>
    content: "content";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/counter-increment>
    counter_increment: "counter-increment";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/counter-reset>
    counter_reset: "counter-reset";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/cursor>
    cursor: "cursor";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/direction>
    direction: "direction";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/display>
    display: "display";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/empty-cells>
    empty_cells: "empty-cells";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/filter>
    filter: "filter";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/flex>
    flex: "flex";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/flex-basis>
    flex_basis: "flex-basis";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/flex-direction>
    flex_direction: "flex-direction";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/flex-flow>
    flex_flow: "flex-flow";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/flex-grow>
    flex_grow: "flex-grow";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/flex-shrink>
    flex_shrink: "flex-shrink";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/flex-wrap>
    flex_wrap: "flex-wrap";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/float>
    float: "float";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/font>
    font: "font";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/font-family>
    font_family: "font-family";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/font-feature-settings>
    font_feature_settings: "font-feature-settings";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/font-kerning>
    font_kerning: "font-kerning";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/font-optical-sizing>
    font_optical_sizing: "font-optical-sizing";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/font-size>
    font_size: "font-size";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/font-size-adjust>
    font_size_adjust: "font-size-adjust";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/font-stretch>
    font_stretch: "font-stretch";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/font-style>
    font_style: "font-style";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/font-synthesis>
    font_synthesis: "font-synthesis";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/font-variant>
    font_variant: "font-variant";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/font-variant-alternates>
    font_variant_alternates: "font-variant-alternates";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/font-variant-caps>
    font_variant_caps: "font-variant-caps";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/font-variant-east-asian>
    font_variant_east_asian: "font-variant-east-asian";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/font-variant-ligatures>
    font_variant_ligatures: "font-variant-ligatures";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/font-variant-numeric>
    font_variant_numeric: "font-variant-numeric";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/font-variant-position>
    font_variant_position: "font-variant-position";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/font-weight>
    font_weight: "font-weight";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/gap>
    gap: "gap";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/grid>
    grid: "grid";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/grid-area>
    grid_area: "grid-area";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/grid-auto-columns>
    grid_auto_columns: "grid-auto-columns";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/grid-auto-flow>
    grid_auto_flow: "grid-auto-flow";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/grid-auto-rows>
    grid_auto_rows: "grid-auto-rows";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/grid-column>
    grid_column: "grid-column";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/grid-column-end>
    grid_column_end: "grid-column-end";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/grid-column-gap>
    grid_column_gap: "grid-column-gap";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/grid-column-start>
    grid_column_start: "grid-column-start";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/grid-gap>
    grid_gap: "grid-gap";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/grid-row>
    grid_row: "grid-row";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/grid-row-end>
    grid_row_end: "grid-row-end";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/grid-row-gap>
    grid_row_gap: "grid-row-gap";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/grid-row-start>
    grid_row_start: "grid-row-start";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/grid-template>
    grid_template: "grid-template";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/grid-template-areas>
    grid_template_areas: "grid-template-areas";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/grid-template-columns>
    grid_template_columns: "grid-template-columns";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/grid-template-rows>
    grid_template_rows: "grid-template-rows";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/hanging-punctuation>
    hanging_punctuation: "hanging-punctuation";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/height>
    height: "height";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/hyphens>
    hyphens: "hyphens";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/image-rendering>
    image_rendering: "image-rendering";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/inline-size>
    inline_size: "inline-size";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/inset>
    inset: "inset";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/inset-block>
    inset_block: "inset-block";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/inset-block-end>
    inset_block_end: "inset-block-end";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/inset-block-start>
    inset_block_start: "inset-block-start";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/inset-inline>
    inset_inline: "inset-inline";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/inset-inline-end>
    inset_inline_end: "inset-inline-end";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/inset-inline-start>
    inset_inline_start: "inset-inline-start";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/isolation>
    isolation: "isolation";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/justify-content>
    justify_content: "justify-content";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/justify-items>
    justify_items: "justify-items";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/justify-self>
    justify_self: "justify-self";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/left>
    left: "left";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/letter-spacing>
    letter_spacing: "letter-spacing";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/line-break>
    line_break: "line-break";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/line-height>
    line_height: "line-height";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/list-style>
    list_style: "list-style";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/list-style-image>
    list_style_image: "list-style-image";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/list-style-position>
    list_style_position: "list-style-position";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/list-style-type>
    list_style_type: "list-style-type";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/margin>
    margin: "margin";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/margin-block>
    margin_block: "margin-block";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/margin-block-end>
    margin_block_end: "margin-block-end";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/margin-block-start>
    margin_block_start: "margin-block-start";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/margin-bottom>
    margin_bottom: "margin-bottom";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/margin-inline>
    margin_inline: "margin-inline";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/margin-inline-end>
    margin_inline_end: "margin-inline-end";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/margin-inline-start>
    margin_inline_start: "margin-inline-start";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/margin-left>
    margin_left: "margin-left";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/margin-right>
    margin_right: "margin-right";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/margin-top>
    margin_top: "margin-top";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/mask>
    mask: "mask";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/mask-border>
    mask_border: "mask-border";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/mask-border-mode>
    mask_border_mode: "mask-border-mode";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/mask-border-outset>
    mask_border_outset: "mask-border-outset";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/mask-border-repeat>
    mask_border_repeat: "mask-border-repeat";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/mask-border-slice>
    mask_border_slice: "mask-border-slice";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/mask-border-source>
    mask_border_source: "mask-border-source";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/mask-border-width>
    mask_border_width: "mask-border-width";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/mask-clip>
    mask_clip: "mask-clip";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/mask-composite>
    mask_composite: "mask-composite";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/mask-image>
    mask_image: "mask-image";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/mask-mode>
    mask_mode: "mask-mode";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/mask-origin>
    mask_origin: "mask-origin";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/mask-position>
    mask_position: "mask-position";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/mask-repeat>
    mask_repeat: "mask-repeat";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/mask-size>
    mask_size: "mask-size";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/mask-type>
    mask_type: "mask-type";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/max-block-size>
    max_block_size: "max-block-size";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/max-height>
    max_height: "max-height";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/max-inline-size>
    max_inline_size: "max-inline-size";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/max-width>
    max_width: "max-width";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/min-block-size>
    min_block_size: "min-block-size";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/min-height>
    min_height: "min-height";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/min-inline-size>
    min_inline_size: "min-inline-size";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/min-width>
    min_width: "min-width";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/mix-blend-mode>
    mix_blend_mode: "mix-blend-mode";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/object-fit>
    object_fit: "object-fit";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/object-position>
    object_position: "object-position";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/offset>
    offset: "offset";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/offset-anchor>
    offset_anchor: "offset-anchor";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/offset-distance>
    offset_distance: "offset-distance";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/offset-path>
    offset_path: "offset-path";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/offset-rotate>
    offset_rotate: "offset-rotate";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/opacity>
    opacity: "opacity";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/order>
    order: "order";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/orphans>
    orphans: "orphans";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/outline>
    outline: "outline";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/outline-color>
    outline_color: "outline-color";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/outline-offset>
    outline_offset: "outline-offset";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/outline-style>
    outline_style: "outline-style";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/outline-width>
    outline_width: "outline-width";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/overflow>
    overflow: "overflow";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/overflow-anchor>
    overflow_anchor: "overflow-anchor";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/overflow-block>
    overflow_block: "overflow-block";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/overflow-clip-margin>
    overflow_clip_margin: "overflow-clip-margin";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/overflow-inline>
    overflow_inline: "overflow-inline";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/overflow-wrap>
    overflow_wrap: "overflow-wrap";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/overflow-x>
    overflow_x: "overflow-x";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/overflow-y>
    overflow_y: "overflow-y";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/padding>
    padding: "padding";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/padding-block>
    padding_block: "padding-block";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/padding-block-end>
    padding_block_end: "padding-block-end";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/padding-block-start>
    padding_block_start: "padding-block-start";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/padding-bottom>
    padding_bottom: "padding-bottom";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/padding-inline>
    padding_inline: "padding-inline";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/padding-inline-end>
    padding_inline_end: "padding-inline-end";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/padding-inline-start>
    padding_inline_start: "padding-inline-start";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/padding-left>
    padding_left: "padding-left";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/padding-right>
    padding_right: "padding-right";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/padding-top>
    padding_top: "padding-top";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/page-break-after>
    page_break_after: "page-break-after";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/page-break-before>
    page_break_before: "page-break-before";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/page-break-inside>
    page_break_inside: "page-break-inside";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/perspective>
    perspective: "perspective";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/perspective-origin>
    perspective_origin: "perspective-origin";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/place-content>
    place_content: "place-content";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/place-items>
    place_items: "place-items";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/place-self>
    place_self: "place-self";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/pointer-events>
    pointer_events: "pointer-events";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/position>
    position: "position";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/print-color-adjust>
    print_color_adjust: "print-color-adjust";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/quotes>
    quotes: "quotes";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/resize>
    resize: "resize";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/right>
    right: "right";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/rotate>
    rotate: "rotate";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/row-gap>
    row_gap: "row-gap";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/ruby-align>
    ruby_align: "ruby-align";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/ruby-merge>
    ruby_merge: "ruby-merge";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/ruby-position>
    ruby_position: "ruby-position";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/scale>
    scale: "scale";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/scroll-behavior>
    scroll_behavior: "scroll-behavior";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/scroll-margin>
    scroll_margin: "scroll-margin";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/scroll-margin-block>
    scroll_margin_block: "scroll-margin-block";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/scroll-margin-block-end>
    scroll_margin_block_end: "scroll-margin-block-end";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/scroll-margin-block-start>
    scroll_margin_block_start: "scroll-margin-block-start";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/scroll-margin-bottom>
    scroll_margin_bottom: "scroll-margin-bottom";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/scroll-margin-inline>
    scroll_margin_inline: "scroll-margin-inline";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/scroll-margin-inline-end>
    scroll_margin_inline_end: "scroll-margin-inline-end";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/scroll-margin-inline-start>
    scroll_margin_inline_start: "scroll-margin-inline-start";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/scroll-margin-left>
    scroll_margin_left: "scroll-margin-left";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/scroll-margin-right>
    scroll_margin_right: "scroll-margin-right";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/scroll-margin-top>
    scroll_margin_top: "scroll-margin-top";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/scroll-padding>
    scroll_padding: "scroll-padding";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/scroll-padding-block>
    scroll_padding_block: "scroll-padding-block";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/scroll-padding-block-end>
    scroll_padding_block_end: "scroll-padding-block-end";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/scroll-padding-block-start>
    scroll_padding_block_start: "scroll-padding-block-start";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/scroll-padding-bottom>
    scroll_padding_bottom: "scroll-padding-bottom";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/scroll-padding-inline>
    scroll_padding_inline: "scroll-padding-inline";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/scroll-padding-inline-end>
    scroll_padding_inline_end: "scroll-padding-inline-end";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/scroll-padding-inline-start>
    scroll_padding_inline_start: "scroll-padding-inline-start";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/scroll-padding-left>
    scroll_padding_left: "scroll-padding-left";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/scroll-padding-right>
    scroll_padding_right: "scroll-padding-right";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/scroll-padding-top>
    scroll_padding_top: "scroll-padding-top";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/scroll-snap-align>
    scroll_snap_align: "scroll-snap-align";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/scroll-snap-stop>
    scroll_snap_stop: "scroll-snap-stop";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/scroll-snap-type>
    scroll_snap_type: "scroll-snap-type";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/shape-image-threshold>
    shape_image_threshold: "shape-image-threshold";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/shape-margin>
    shape_margin: "shape-margin";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/shape-outside>
    shape_outside: "shape-outside";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/tab-size>
    tab_size: "tab-size";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/table-layout>
    table_layout: "table-layout";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/text-align>
    text_align: "text-align";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/text-align-last>
    text_align_last: "text-align-last";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/text-combine-upright>
    text_combine_upright: "text-combine-upright";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/text-decoration>
    text_decoration: "text-decoration";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/text-decoration-color>
    text_decoration_color: "text-decoration-color";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/text-decoration-line>
    text_decoration_line: "text-decoration-line";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/text-decoration-skip>
    text_decoration_skip: "text-decoration-skip";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/text-decoration-skip-ink>
    text_decoration_skip_ink: "text-decoration-skip-ink";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/text-decoration-style>
    text_decoration_style: "text-decoration-style";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/text-emphasis>
    text_emphasis: "text-emphasis";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/text-emphasis-color>
    text_emphasis_color: "text-emphasis-color";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/text-emphasis-position>
    text_emphasis_position: "text-emphasis-position";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/text-emphasis-style>
    text_emphasis_style: "text-emphasis-style";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/text-indent>
    text_indent: "text-indent";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/text-justify>
    text_justify: "text-justify";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/text-orientation>
    text_orientation: "text-orientation";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/text-overflow>
    text_overflow: "text-overflow";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/text-rendering>
    text_rendering: "text-rendering";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/text-shadow>
    text_shadow: "text-shadow";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/text-transform>
    text_transform: "text-transform";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/text-underline-offset>
    text_underline_offset: "text-underline-offset";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/text-underline-position>
    text_underline_position: "text-underline-position";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/top>
    top: "top";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/transform>
    transform: "transform";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/transform-box>
    transform_box: "transform-box";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/transform-origin>
    transform_origin: "transform-origin";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/transform-style>
    transform_style: "transform-style";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/transition>
    transition: "transition";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/transition-delay>
    transition_delay: "transition-delay";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/transition-duration>
    transition_duration: "transition-duration";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/transition-property>
    transition_property: "transition-property";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/transition-timing-function>
    transition_timing_function: "transition-timing-function";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/unicode-bidi>
    unicode_bidi: "unicode-bidi";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/user-select>
    user_select: "user-select";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/vertical-align>
    vertical_align: "vertical-align";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/visibility>
    visibility: "visibility";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/white-space>
    white_space: "white-space";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/widows>
    widows: "widows";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/width>
    width: "width";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/will-change>
    will_change: "will-change";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/word-break>
    word_break: "word-break";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/word-spacing>
    word_spacing: "word-spacing";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/writing-mode>
    writing_mode: "writing-mode";

    /// <https://developer.mozilla.org/en-US/docs/Web/CSS/z-index>
    z_index: "z-index";
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_table_is_sorted_and_unique() {
        for pair in PROPERTIES.windows(2) {
            assert!(pair[0] < pair[1], "{} must sort before {}", pair[0], pair[1]);
        }
        assert_eq!(PROPERTIES.len(), 354);
        assert_eq!(PROPERTIES.first(), Some(&"align-content"));
        assert_eq!(PROPERTIES.last(), Some(&"z-index"));
    }

    #[test]
    fn test_names_are_kebab_case() {
        for name in PROPERTIES {
            assert!(
                name.chars().all(|c| c.is_ascii_lowercase() || c == '-'),
                "unexpected character in {name}"
            );
            assert!(!name.starts_with('-') && !name.ends_with('-'));
        }
    }

    #[test]
    fn test_is_known_property() {
        assert!(is_known_property("background-color"));
        assert!(is_known_property("all"));
        assert!(is_known_property("z-index"));
        assert!(!is_known_property("Background-Color"));
        assert!(!is_known_property("background_color"));
        assert!(!is_known_property("--brand-color"));
        assert!(!is_known_property(""));
    }

    #[test]
    fn test_setter_appends_its_own_name() {
        let mut builder = StyleBuilder::new("p", "");
        builder
            .align_content("center")
            .float("left")
            .grid_template_areas("'a b'")
            .z_index("3");

        let names: Vec<&str> = builder
            .declarations()
            .iter()
            .map(|d| d.property.as_str())
            .collect();
        assert_eq!(names, ["align-content", "float", "grid-template-areas", "z-index"]);
    }
}
