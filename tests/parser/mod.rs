mod tests_error_recovery;
mod tests_lexer;
mod tests_printer;
