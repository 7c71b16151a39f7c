mod ast_node_children_tests;
mod ast_node_equality_tests;
mod syntax_node_tests;
