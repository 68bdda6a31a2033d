use adminboard::models::OrderStatus;
use adminboard::theme::Palette;
use adminboard::ui::components::badge::{badge_style, badge_variant_for, create_badge, create_status_badge, BadgeVariant};

#[test]
fn test_status_maps_to_variant() {
    assert_eq!(badge_variant_for(OrderStatus::Completed), BadgeVariant::Default);
    assert_eq!(badge_variant_for(OrderStatus::Processing), BadgeVariant::Secondary);
    assert_eq!(badge_variant_for(OrderStatus::Pending), BadgeVariant::Outline);
}

#[test]
fn test_unknown_status_falls_back_to_outline() {
    let status = OrderStatus::from_label("Refunded");
    assert_eq!(status, OrderStatus::Other("Refunded"));
    assert_eq!(badge_variant_for(status), BadgeVariant::Outline);

    let span = create_status_badge(status, &Palette::DARK);
    assert_eq!(span.content, "[Refunded]");
}

#[test]
fn test_filled_variants_use_palette_backgrounds() {
    let palette = Palette::LIGHT;
    assert_eq!(badge_style(BadgeVariant::Default, &palette).bg, Some(palette.primary));
    assert_eq!(badge_style(BadgeVariant::Secondary, &palette).bg, Some(palette.secondary));
    assert_eq!(badge_style(BadgeVariant::Outline, &palette).bg, None);
}

#[test]
fn test_badge_text_padding() {
    let palette = Palette::DARK;
    assert_eq!(create_badge("New", BadgeVariant::Default, &palette).content, " New ");
    assert_eq!(create_badge("Pending", BadgeVariant::Outline, &palette).content, "[Pending]");
}
