mod tests_model_queries;
mod tests_validation;
