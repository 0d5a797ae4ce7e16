mod animation_tests;
