mod type_annotation_tests;
mod type_ref_tests;
