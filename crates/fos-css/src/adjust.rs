//! Style Adjustment
//!
//! Fixups applied once the cascade has run: display changes forced by
//! positioning and floating, legacy table quirks, stacking contexts and the
//! text decorations an element inherits from its ancestors.

use crate::computed::{ComputedStyle, Display, Float, Position, TextAlign, TextDecoration};

/// Element facts the adjustments depend on
#[derive(Debug, Clone, Copy, Default)]
pub struct AdjustTarget<'a> {
    /// Local name of an HTML element, `None` for other elements and
    /// pseudo-element styles
    pub html_tag: Option<&'a str>,
    /// Document element
    pub is_root: bool,
    pub quirks: bool,
}

/// Adjust a freshly cascaded style
pub fn adjust_render_style(style: &mut ComputedStyle, parent: &ComputedStyle, target: AdjustTarget<'_>) {
    let ni = &mut style.non_inherited;
    ni.original_display = ni.display;

    if ni.display != Display::None {
        match target.html_tag {
            // Quirk: tables ignore `display` on cells and the table itself
            Some("td") if target.quirks => {
                ni.display = Display::TableCell;
                ni.float = Float::None;
            }
            Some("table") if target.quirks => {
                ni.display = if ni.display.is_inline_type() {
                    Display::InlineTable
                } else {
                    Display::Table
                };
            }
            Some("frame" | "frameset") => {
                ni.position = Position::Static;
                ni.display = Display::Block;
            }
            Some("th") if style.inherited.text_align == TextAlign::Auto => {
                style.inherited.text_align = TextAlign::Center;
            }
            _ => {}
        }

        let ni = &mut style.non_inherited;
        let out_of_flow = matches!(ni.position, Position::Absolute | Position::Fixed);
        let floating = ni.float != Float::None;
        if !matches!(ni.display, Display::Block | Display::Table | Display::Box)
            && (out_of_flow || floating || target.is_root)
        {
            ni.display = match ni.display {
                Display::InlineTable => Display::Table,
                Display::InlineBox => Display::Box,
                // Quirk: floated list items lose their marker box
                Display::ListItem if !(target.quirks && floating) => Display::ListItem,
                _ => Display::Block,
            };
        }

        if ni.display == Display::TableRow && ni.position == Position::Relative {
            ni.position = Position::Static;
        }
    }

    let ni = &mut style.non_inherited;
    if ni.position == Position::Static && ni.opacity >= 1.0 {
        ni.z_index = if target.is_root { Some(0) } else { None };
    } else if ni.opacity < 1.0 && ni.z_index.is_none() {
        ni.z_index = Some(0);
    }

    // Inline formatting roots start a fresh decoration scope
    let own = ni.text_decoration;
    let isolated = matches!(
        ni.display,
        Display::Table | Display::InlineTable | Display::RunIn | Display::InlineBlock | Display::InlineBox
    );
    let mut decorations = if isolated {
        TextDecoration::NONE
    } else {
        parent.inherited.text_decorations_in_effect
    };
    decorations.insert(own);
    style.inherited.text_decorations_in_effect = decorations;

    style.non_inherited.background_layers.adjust();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn adjust(style: &mut ComputedStyle, target: AdjustTarget<'_>) {
        adjust_render_style(style, &ComputedStyle::initial(), target);
    }

    #[test]
    fn test_floats_and_positioned_become_blocks() {
        let mut style = ComputedStyle::initial();
        style.non_inherited.float = Float::Left;
        adjust(&mut style, AdjustTarget::default());
        assert_eq!(style.display(), Display::Block);
        assert_eq!(style.non_inherited.original_display, Display::Inline);

        let mut style = ComputedStyle::initial();
        style.non_inherited.position = Position::Absolute;
        style.non_inherited.display = Display::InlineTable;
        adjust(&mut style, AdjustTarget::default());
        assert_eq!(style.display(), Display::Table);

        let mut style = ComputedStyle::initial();
        style.non_inherited.display = Display::ListItem;
        style.non_inherited.float = Float::Right;
        adjust(&mut style, AdjustTarget::default());
        assert_eq!(style.display(), Display::ListItem);
        adjust(
            &mut style,
            AdjustTarget {
                quirks: true,
                ..AdjustTarget::default()
            },
        );
        assert_eq!(style.display(), Display::Block);
    }

    #[test]
    fn test_root_is_block_with_stacking_context() {
        let mut style = ComputedStyle::initial();
        adjust(
            &mut style,
            AdjustTarget {
                is_root: true,
                ..AdjustTarget::default()
            },
        );
        assert_eq!(style.display(), Display::Block);
        assert_eq!(style.non_inherited.z_index, Some(0));
    }

    #[test]
    fn test_display_none_untouched() {
        let mut style = ComputedStyle::initial();
        style.non_inherited.display = Display::None;
        style.non_inherited.float = Float::Left;
        adjust(&mut style, AdjustTarget::default());
        assert_eq!(style.display(), Display::None);
    }

    #[test]
    fn test_table_quirks() {
        let quirks = AdjustTarget {
            html_tag: Some("td"),
            quirks: true,
            ..AdjustTarget::default()
        };
        let mut cell = ComputedStyle::initial();
        cell.non_inherited.display = Display::Block;
        cell.non_inherited.float = Float::Left;
        adjust(&mut cell, quirks);
        assert_eq!(cell.display(), Display::TableCell);
        assert_eq!(cell.non_inherited.float, Float::None);

        let mut table = ComputedStyle::initial();
        adjust(
            &mut table,
            AdjustTarget {
                html_tag: Some("table"),
                ..quirks
            },
        );
        assert_eq!(table.display(), Display::InlineTable);

        let mut strict = ComputedStyle::initial();
        strict.non_inherited.display = Display::Block;
        adjust(
            &mut strict,
            AdjustTarget {
                html_tag: Some("td"),
                ..AdjustTarget::default()
            },
        );
        assert_eq!(strict.display(), Display::Block);
    }

    #[test]
    fn test_th_centered_and_relative_rows() {
        let mut th = ComputedStyle::initial();
        th.non_inherited.display = Display::TableRow;
        th.non_inherited.position = Position::Relative;
        adjust(
            &mut th,
            AdjustTarget {
                html_tag: Some("th"),
                ..AdjustTarget::default()
            },
        );
        assert_eq!(th.inherited.text_align, TextAlign::Center);
        assert_eq!(th.non_inherited.position, Position::Static);
    }

    #[test]
    fn test_opacity_creates_stacking_context() {
        let mut style = ComputedStyle::initial();
        style.non_inherited.opacity = 0.5;
        adjust(&mut style, AdjustTarget::default());
        assert_eq!(style.non_inherited.z_index, Some(0));

        let mut style = ComputedStyle::initial();
        style.non_inherited.z_index = Some(3);
        adjust(&mut style, AdjustTarget::default());
        assert_eq!(style.non_inherited.z_index, None);
    }

    #[test]
    fn test_text_decorations_in_effect() {
        let mut parent = ComputedStyle::initial();
        parent.inherited.text_decorations_in_effect = TextDecoration::UNDERLINE;

        let mut child = ComputedStyle::inherit_from(&parent);
        child.non_inherited.text_decoration = TextDecoration::OVERLINE;
        adjust_render_style(&mut child, &parent, AdjustTarget::default());
        let effect = child.inherited.text_decorations_in_effect;
        assert!(effect.contains(TextDecoration::UNDERLINE));
        assert!(effect.contains(TextDecoration::OVERLINE));

        let mut inline_block = ComputedStyle::inherit_from(&parent);
        inline_block.non_inherited.display = Display::InlineBlock;
        adjust_render_style(&mut inline_block, &parent, AdjustTarget::default());
        assert!(inline_block.inherited.text_decorations_in_effect.is_empty());
    }
}
