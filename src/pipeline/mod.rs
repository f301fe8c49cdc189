// Pipeline orchestration — the two fan-out stages.

pub mod identify;
