//! "Recomendados" carousel: paged products with favorite toggles.

mod card;
mod state;
mod view;

pub use card::RecommendationCard;
pub use state::{FetchOutcome, FetchTicket, RecommendationsState, RenderPhase};
pub use view::{dispatch_fetch, fetch_current_page, Recommendations, RecommendationsCarousel};
