pub mod artic;
