/// Chart core: pure layout and scale computation, no drawing.
///
/// Architecture:
/// ```text
///   TemperatureDataset
///        │
///        ▼
///   ┌──────────┐    ┌──────────────────┐
///   │  layout   │    │ TemperatureColorMap│  (color.rs)
///   └──────────┘    └──────────────────┘
///        │                  │
///        ▼                  ▼
///   ┌──────────┐      ┌──────────┐
///   │  cells    │      │  legend   │
///   └──────────┘      └──────────┘
///        │                  │
///        └───────┬──────────┘
///                ▼
///          ui::heatmap (painter)
/// ```
/// Everything here is recomputed from the dataset each frame; the UI layer
/// only translates these rectangles into screen space and paints them.

pub mod layout;
pub mod legend;
pub mod scale;
