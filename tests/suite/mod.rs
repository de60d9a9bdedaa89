mod choice_set;
mod declaration;
