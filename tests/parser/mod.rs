mod tests_line_parser;
