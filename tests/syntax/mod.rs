mod tests_records;
