//! Yandex service clients: geocoder, static maps, weather, and the
//! Dialogs image store.

pub mod geocoder;
pub mod images;
pub mod static_map;
pub mod weather;

pub use geocoder::YandexGeocoder;
pub use images::DialogsImageStore;
pub use static_map::YandexStaticMap;
pub use weather::YandexWeather;
