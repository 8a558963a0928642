mod markup_test;
mod scripting_test;
