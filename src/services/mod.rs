// Scout services
// Services provide stateless functionality: URL resolution, engine configuration, favicons.

pub mod favicon;
pub mod search_resolver;
pub mod settings_engine;
