mod schema_query_tests;
