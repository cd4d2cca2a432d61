//! Core-Domänentypen: Koordinaten, Kamera, Annotationen, Datensätze.

pub mod annotations;
pub mod basemap;
pub mod camera;
pub mod geo;
pub mod record;

pub use annotations::{
    shared_layer, AnimationStyle, AnnotationLayer, AreaRectangle, HighlightCircle, Icon, Marker,
    MarkerId, SharedAnnotations,
};
pub use basemap::BasemapImage;
pub use camera::Camera2D;
pub use geo::{LatLon, MapView};
pub use record::{DatasetRecord, DatasetResponse, OverlayPoint};
