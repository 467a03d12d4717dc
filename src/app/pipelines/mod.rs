pub mod mapping_pipeline;
