mod tag_commands_test;
