//! SerpApi provider: wire models, paginated fetch, and the normalization pipeline

pub mod error;
pub mod normalize;
pub mod raw_event;
pub mod serpapi;

pub use error::{ProviderError, ProviderErrorCode, ProviderResult};
pub use normalize::{RangePolicy, normalize_event, normalize_event_with, normalize_events};
pub use raw_event::{RawAddress, RawDate, RawEvent, RawVenue};
pub use serpapi::{SearchParams, SerpApiClient};
