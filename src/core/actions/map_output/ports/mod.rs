pub mod output_map;
