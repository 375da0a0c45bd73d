//! Oval UI: oval and capsule shaped pointer controls on top of `oval-engine`.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use oval_ui::prelude::*;
//!
//! let mut ui = UiScene::new();
//! let mut root = Element::new(
//!     TiledPanel::new()
//!         .background(Color::white())
//!         .child(
//!             OvalButton::new(ShapeDescriptor::capsule(Orientation::Horizontal))
//!                 .on_activate(|| log::info!("clicked")),
//!             Rect::new(20.0, 20.0, 160.0, 48.0),
//!         ),
//! );
//!
//! // Once per frame:
//! let draw_list = ui.frame(&mut root, viewport, &UiInput { pointer, primary_down });
//! canvas.render(draw_list);
//! ```
//!
//! # Extending with custom widgets
//!
//! Implement [`Widget`](widget::Widget) for any type, then use it anywhere an
//! [`Element`](widget::Element) is accepted:
//!
//! ```rust,ignore
//! use oval_ui::prelude::*;
//!
//! pub struct Badge;
//!
//! impl Widget for Badge {
//!     fn paint(&self, painter: &mut Painter, rect: Rect) {
//!         painter.fill_region(ShapeDescriptor::oval().region(rect), Color::red());
//!     }
//! }
//! ```

pub mod border;
pub mod event;
pub mod interaction;
pub mod painter;
pub mod scene;
pub mod shape;
pub mod widget;
pub mod widgets;

/// Everything needed to build and extend a control tree.
pub mod prelude {
    pub use crate::border::{border_ring, BorderRing};
    pub use crate::event::{EventResult, PointerEvent};
    pub use crate::interaction::{FillTone, Interaction, Palette, Phase};
    pub use crate::painter::Painter;
    pub use crate::scene::{UiInput, UiScene};
    pub use crate::shape::{Orientation, ShapeDescriptor, ShapeError, ShapeFamily};
    pub use crate::widget::{Element, Widget};
    pub use crate::widgets::{
        oval_button::{BorderToggle, FillSource, ImageProvider, OvalButton},
        tiled_panel::TiledPanel,
    };

    // Engine primitives.
    pub use oval_engine::coords::{Rect, Vec2};
    pub use oval_engine::geom::Region;
    pub use oval_engine::paint::{Color, ImageHandle};
}
