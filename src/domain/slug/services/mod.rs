mod lifecycle;
mod resolver;

pub use lifecycle::SlugLifecycle;
pub use resolver::SlugResolver;
