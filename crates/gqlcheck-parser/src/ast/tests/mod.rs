mod definition_tests;
