use egui::{Color32, Context, Stroke, Style, Visuals};

// Palette
pub const DARK_BG: Color32 = Color32::from_rgb(0x1e, 0x1f, 0x23);
pub const DARK_PANEL: Color32 = Color32::from_rgb(0x25, 0x26, 0x28);
pub const DARK_WIDGET: Color32 = Color32::from_rgb(0x2e, 0x2f, 0x33);
pub const DARK_HOVER: Color32 = Color32::from_rgb(0x33, 0x34, 0x38);
pub const ACCENT: Color32 = Color32::from_rgb(0x2b, 0x8c, 0xff);
pub const TEXT: Color32 = Color32::from_rgb(0xe6, 0xee, 0xf6);
pub const SUBTEXT: Color32 = Color32::from_rgb(0x9a, 0xa6, 0xb2);

pub const PREVIEW_BG: Color32 = Color32::from_rgb(0x0f, 0x11, 0x13);
pub const PREVIEW_BORDER: Color32 = Color32::from_rgb(0x2e, 0x2f, 0x33);
pub const TIMELINE_BG: Color32 = Color32::from_rgb(0x14, 0x15, 0x17);

pub fn configure_style(ctx: &Context) {
    let mut style = Style::default();
    style.spacing.item_spacing = egui::vec2(6.0, 6.0);
    style.spacing.button_padding = egui::vec2(8.0, 6.0);
    style.spacing.scroll.bar_width = 8.0;

    let cr = egui::CornerRadius::same(3);

    let mut v = Visuals::dark();
    v.panel_fill = DARK_PANEL;
    v.window_fill = DARK_PANEL;
    v.faint_bg_color = DARK_BG;
    v.extreme_bg_color = DARK_BG;
    v.window_stroke = Stroke::new(1.0, DARK_WIDGET);
    v.selection.bg_fill = ACCENT;
    v.selection.stroke = Stroke::new(1.0, TEXT);
    v.hyperlink_color = ACCENT;

    v.widgets.noninteractive.bg_fill = DARK_PANEL;
    v.widgets.noninteractive.fg_stroke = Stroke::new(1.0, TEXT);
    v.widgets.noninteractive.corner_radius = cr;

    // Flat buttons: same fill as the panel until hovered.
    v.widgets.inactive.bg_fill = DARK_PANEL;
    v.widgets.inactive.weak_bg_fill = DARK_PANEL;
    v.widgets.inactive.bg_stroke = Stroke::NONE;
    v.widgets.inactive.fg_stroke = Stroke::new(1.0, TEXT);
    v.widgets.inactive.corner_radius = cr;

    v.widgets.hovered.bg_fill = DARK_HOVER;
    v.widgets.hovered.weak_bg_fill = DARK_HOVER;
    v.widgets.hovered.bg_stroke = Stroke::new(1.0, DARK_WIDGET);
    v.widgets.hovered.fg_stroke = Stroke::new(1.0, TEXT);
    v.widgets.hovered.corner_radius = cr;

    v.widgets.active.bg_fill = DARK_HOVER;
    v.widgets.active.weak_bg_fill = DARK_HOVER;
    v.widgets.active.bg_stroke = Stroke::new(1.0, ACCENT);
    v.widgets.active.fg_stroke = Stroke::new(1.5, TEXT);
    v.widgets.active.corner_radius = cr;

    v.override_text_color = Some(TEXT);

    style.visuals = v;

    ctx.options_mut(|o| o.theme_preference = egui::ThemePreference::Dark);
    ctx.set_style_of(egui::Theme::Dark, style);
}
