//! Integration tests for the resolve -> performance -> cache -> animate -> build pipeline
//!
//! These tests verify that:
//! - Explicit props beat the theme, the theme beats the defaults
//! - Low performance mode halves the blur before it reaches the cache
//! - Surfaces with equal blur share one filter object
//! - Animated containers report live values and release their animator on detach
//! - Each component shapes its surface correctly

use std::cell::Cell;
use std::rc::Rc;
use std::sync::Arc;
use std::time::Duration;

use frost_animation::Easing;
use frost_core::CornerRadius;
use frost_paint::FilterCache;
use frost_theme::{defaults, GlassPreset, GlassTheme, PerformanceMode};
use frost_widgets::{
    AnimatedGlassContainer, GlassAppBar, GlassBottomSheet, GlassButton, GlassCard, GlassContainer,
    GlassContext, GlassScheduler, GlassStyle, RenderNode, SurfaceRole, Widget, APP_BAR_HEIGHT,
};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn isolated(theme: GlassTheme) -> GlassContext {
    init_tracing();
    GlassContext::new(theme).with_filter_cache(Arc::new(FilterCache::new()))
}

#[test]
fn test_resolution_precedence() {
    let ctx = isolated(GlassTheme::new().blur(8.0).opacity(0.3).corner_radius(4.0));
    let node = GlassContainer::new()
        .style(GlassStyle::new().opacity(0.6))
        .build(&ctx);
    let layer = node.as_glass().unwrap();

    assert_eq!(layer.visual.opacity, 0.6);
    assert_eq!(layer.visual.blur, 8.0);
    assert_eq!(layer.visual.corner_radius, CornerRadius::uniform(4.0));
    assert_eq!(layer.visual.border_width, defaults::BORDER_WIDTH);
    assert_eq!(layer.visual.tint, defaults::TINT);
}

#[test]
fn test_low_performance_halves_cached_blur() {
    let ctx = isolated(GlassTheme::new().performance_mode(PerformanceMode::Low));
    let node = GlassCard::new().style(GlassStyle::new().blur(12.0)).build(&ctx);
    let layer = node.as_glass().unwrap();

    assert_eq!(layer.visual.blur, 6.0);
    let filter = layer.backdrop.as_ref().unwrap();
    assert_eq!(filter.sigma_x(), 6.0);
    assert!(ctx.filters().contains(6.0, 6.0));
    assert!(!ctx.filters().contains(12.0, 12.0));
}

#[test]
fn test_equal_blur_shares_one_filter() {
    let ctx = isolated(GlassPreset::Frost.theme());
    let tree = GlassCard::new()
        .child(GlassButton::new("One"))
        .child(GlassButton::new("Two"))
        .build(&ctx);

    let card = tree.as_glass().unwrap();
    let first = card.children[0].as_glass().unwrap();
    let second = card.children[1].as_glass().unwrap();
    assert!(Arc::ptr_eq(
        first.backdrop.as_ref().unwrap(),
        second.backdrop.as_ref().unwrap()
    ));
    assert!(Arc::ptr_eq(
        card.backdrop.as_ref().unwrap(),
        first.backdrop.as_ref().unwrap()
    ));
    assert_eq!(ctx.filters().constructions(), 1);
}

#[test]
fn test_zero_blur_skips_the_cache() {
    let ctx = isolated(GlassTheme::new().blur(0.0));
    let node = GlassContainer::new().build(&ctx);
    assert!(node.as_glass().unwrap().backdrop.is_none());
    assert!(ctx.filters().is_empty());
}

#[test]
fn test_animated_container_end_to_end() {
    let ctx = isolated(GlassTheme::new());
    let mut scheduler = GlassScheduler::new();
    let completions = Rc::new(Cell::new(0));
    let counter = completions.clone();

    let timing = GlassStyle::new()
        .duration(Duration::from_millis(500))
        .easing(Easing::Linear);
    let mut glass = AnimatedGlassContainer::new(timing.clone().blur(5.0).opacity(0.1))
        .on_complete(move || counter.set(counter.get() + 1));
    glass.on_attach(&ctx, &mut scheduler);

    assert!(glass.update(timing.blur(20.0).opacity(0.25), &ctx, &mut scheduler));

    scheduler.tick_by(Duration::from_millis(250));
    let node = glass.build(&ctx, &scheduler);
    let layer = node.as_glass().unwrap();
    assert!((layer.visual.blur - 12.5).abs() < 1e-4);
    assert!((layer.visual.opacity - 0.175).abs() < 1e-6);
    assert_eq!(layer.backdrop.as_ref().unwrap().sigma_x(), layer.visual.blur);
    assert_eq!(completions.get(), 0);

    assert_eq!(scheduler.tick_by(Duration::from_millis(250)), 1);
    let live = glass.live_snapshot(&ctx, &scheduler);
    assert_eq!(live.blur, 20.0);
    assert_eq!(live.opacity, 0.25);

    scheduler.tick_by(Duration::from_millis(250));
    assert_eq!(completions.get(), 1);

    assert!(glass.on_detach(&mut scheduler));
    assert!(scheduler.is_empty());
    assert!(!glass.on_detach(&mut scheduler));
}

#[test]
fn test_timing_change_mid_run_does_not_jump() {
    let ctx = isolated(GlassTheme::new());
    let mut scheduler = GlassScheduler::new();
    let timing = GlassStyle::new()
        .duration(Duration::from_millis(100))
        .easing(Easing::Linear);
    let mut glass = AnimatedGlassContainer::new(timing.clone().blur(0.0));
    glass.on_attach(&ctx, &mut scheduler);
    glass.update(timing.blur(10.0), &ctx, &mut scheduler);
    scheduler.tick_by(Duration::from_millis(50));
    let before = glass.live_snapshot(&ctx, &scheduler);

    let slower = ctx.scoped(
        &GlassTheme::new()
            .duration(Duration::from_secs(1))
            .easing(Easing::EaseIn),
    );
    let restyled = GlassStyle::new().blur(10.0);
    assert!(!glass.update(restyled, &slower, &mut scheduler));
    assert_eq!(glass.live_snapshot(&slower, &scheduler), before);

    scheduler.tick_by(Duration::from_millis(50));
    assert_eq!(glass.live_snapshot(&slower, &scheduler).blur, 10.0);
}

#[test]
fn test_reattached_container_keeps_notifying() {
    let ctx = isolated(GlassTheme::new());
    let mut scheduler = GlassScheduler::new();
    let completions = Rc::new(Cell::new(0));
    let counter = completions.clone();
    let quick = GlassStyle::new().duration(Duration::from_millis(40));
    let mut glass = AnimatedGlassContainer::new(quick.clone().opacity(0.1))
        .on_complete(move || counter.set(counter.get() + 1));

    for (round, opacity) in [0.2, 0.3, 0.4].into_iter().enumerate() {
        glass.on_attach(&ctx, &mut scheduler);
        assert!(glass.update(quick.clone().opacity(opacity), &ctx, &mut scheduler));
        scheduler.tick_by(Duration::from_millis(40));
        assert_eq!(completions.get(), round + 1);
        glass.on_detach(&mut scheduler);
        assert!(scheduler.is_empty());
    }
}

#[test]
fn test_independent_animated_containers() {
    let ctx = isolated(GlassTheme::new());
    let mut scheduler = GlassScheduler::new();
    let quick = GlassStyle::new()
        .duration(Duration::from_millis(100))
        .easing(Easing::Linear);

    let mut a = AnimatedGlassContainer::new(quick.clone().opacity(0.1));
    let mut b = AnimatedGlassContainer::new(quick.clone().opacity(0.1));
    a.on_attach(&ctx, &mut scheduler);
    b.on_attach(&ctx, &mut scheduler);

    a.update(quick.clone().opacity(0.5), &ctx, &mut scheduler);
    scheduler.tick_by(Duration::from_millis(50));

    assert!((a.live_snapshot(&ctx, &scheduler).opacity - 0.3).abs() < 1e-6);
    assert_eq!(b.live_snapshot(&ctx, &scheduler).opacity, 0.1);

    a.on_detach(&mut scheduler);
    assert_eq!(scheduler.len(), 1);
    assert!(!scheduler.has_active_animations());
}

#[test]
fn test_app_bar_is_square_and_fixed_height() {
    let ctx = isolated(GlassTheme::new().corner_radius(12.0));
    let node = GlassAppBar::new("Inbox")
        .action(GlassButton::new("Edit"))
        .build(&ctx);
    let layer = node.as_glass().unwrap();

    assert_eq!(layer.role, SurfaceRole::AppBar);
    assert_eq!(layer.visual.corner_radius, CornerRadius::ZERO);
    assert_eq!(layer.height, Some(APP_BAR_HEIGHT));
    assert!(matches!(&layer.children[0], RenderNode::Text { text, .. } if text == "Inbox"));
    assert!(matches!(&layer.children[1], RenderNode::Row(actions) if actions.len() == 1));

    let rounded = GlassAppBar::new("Inbox")
        .style(GlassStyle::new().corner_radius(8.0))
        .build(&ctx);
    assert_eq!(
        rounded.as_glass().unwrap().visual.corner_radius,
        CornerRadius::uniform(8.0)
    );
}

#[test]
fn test_bottom_sheet_rounds_top_corners_only() {
    let ctx = isolated(GlassTheme::new().corner_radius(24.0));
    let node = GlassBottomSheet::new()
        .child(GlassCard::new().title("Details"))
        .build(&ctx);
    let layer = node.as_glass().unwrap();

    assert_eq!(layer.visual.corner_radius, CornerRadius::top(24.0));
    assert!(matches!(layer.children[0], RenderNode::Handle { .. }));
    assert_eq!(layer.children[1].as_glass().unwrap().role, SurfaceRole::Card);

    let bare = GlassBottomSheet::new().show_handle(false).build(&ctx);
    assert!(bare.as_glass().unwrap().children.is_empty());
}

#[test]
fn test_disabled_button_uses_default_factor() {
    let ctx = isolated(GlassTheme::new().opacity(0.3));
    let node = GlassButton::new("Send").disabled(true).build(&ctx);
    let layer = node.as_glass().unwrap();
    assert!((layer.visual.opacity - 0.3 * defaults::DISABLED_OPACITY).abs() < 1e-6);
    assert_eq!(layer.frost.a, layer.visual.opacity);
}

#[test]
fn test_backdrop_is_blurred_by_the_shared_filter() {
    let ctx = isolated(GlassTheme::new().blur(1.0));
    let node = GlassContainer::new().build(&ctx);
    let layer = node.as_glass().unwrap();

    let mut pixels = vec![0u8; 5 * 5 * 4];
    let center = (2 * 5 + 2) * 4;
    pixels[center..center + 4].copy_from_slice(&[255, 255, 255, 255]);

    let blurred = layer.blur_backdrop(&pixels, 5, 5).unwrap();
    assert!(blurred[center] < 255);
    assert!(blurred[center + 4] > 0);
}
