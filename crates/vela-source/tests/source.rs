mod source {
    mod line_ending;
    mod line_index;
}
