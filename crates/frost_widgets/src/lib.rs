//! Frost Widget Library
//!
//! Declarative frosted glass components.
//!
//! Every component resolves its [`GlassStyle`] against the [`GlassContext`]
//! (explicit prop, then theme, then default), scales the blur by the
//! performance mode and asks the context's filter cache for a shared backdrop
//! filter. The result is a [`RenderNode`] tree; painting it is up to the host.
//!
//! ```rust
//! use frost_widgets::{GlassButton, GlassCard, GlassContext, GlassStyle, Widget};
//!
//! let ctx = GlassContext::default();
//! let card = GlassCard::new()
//!     .title("Settings")
//!     .style(GlassStyle::new().opacity(0.2))
//!     .child(GlassButton::new("Save"));
//! let tree = card.build(&ctx);
//! assert_eq!(tree.glass_count(), 2);
//! ```

pub mod animated;
pub mod app_bar;
pub mod bottom_sheet;
pub mod button;
pub mod card;
pub mod container;
pub mod context;
pub mod render;
pub mod style;
pub mod widget;

pub use animated::{AnimatedGlassContainer, GlassScheduler};
pub use app_bar::{GlassAppBar, APP_BAR_HEIGHT};
pub use bottom_sheet::GlassBottomSheet;
pub use button::GlassButton;
pub use card::GlassCard;
pub use container::GlassContainer;
pub use context::GlassContext;
pub use render::{GlassLayer, RenderNode, SurfaceRole};
pub use style::GlassStyle;
pub use widget::Widget;
