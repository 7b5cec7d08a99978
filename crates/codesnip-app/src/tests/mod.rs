mod overlay_tests;
