mod focus_tests;
