use sort_classic::inplace::bubble;
use sort_test_tools::instantiate_sort_tests;

instantiate_sort_tests!(bubble::SortImpl);
