pub mod common;
pub mod vcf;
