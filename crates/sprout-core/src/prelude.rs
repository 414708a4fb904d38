pub use crate::animation::SpringSpec;
pub use crate::color::Color;
pub use crate::error::SaveStateError;
pub use crate::geometry::Size;
pub use crate::locals::{
    Density, Dp, TextStyleSpec, Theme, Typography, density, dp_to_px, theme, typography,
    with_density, with_theme, with_typography,
};
pub use crate::modifier::{Alignment, Arrangement, Modifier, PaddingValues};
pub use crate::runtime::{
    Frame, Scheduler, Target, generation, remember, remember_with_key,
};
pub use crate::scope::{Scope, current_scope, scoped_effect};
pub use crate::semantics::{Role, Semantics};
pub use crate::signal::{Signal, WeakSignal, signal};
pub use crate::state::{
    SavedInstanceState, StateSaver, remember_saveable, remember_saveable_with,
};
pub use crate::view::{FontWeight, ImageVector, View, ViewId, ViewKind};
