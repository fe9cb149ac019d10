mod wolfram;
