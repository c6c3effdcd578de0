mod pipeline;
mod stats;
