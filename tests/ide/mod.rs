mod tests_analysis;
mod tests_completion;
mod tests_navigation;
