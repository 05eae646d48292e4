//! Reusable system declarations.

/// Two processes sharing an event, with clocks, an int and attributes
pub const TRAIN_GATE: &str = "\
# train and gate, reduced
system:train_gate{}

clock:1:x
clock:1:y
int:1:0:4:0:count{}

event:approach
event:exit
event:tau

process:Train
location:Train:far{initial: : labels:safe}
location:Train:near{invariant:x<=5}
edge:Train:near:far:approach{do:x=0}
edge:Train:far:near:exit{provided:x>2}

process:Gate
location:Gate:up{initial:}
location:Gate:down{}
edge:Gate:down:up:approach
edge:Gate:up:down:exit{do:count=count+1}

sync:Train@approach:Gate@approach
sync:Train@exit:Gate@exit?
";

/// The minimal clean round trip
pub const SINGLE_EDGE: &str = "\
system : S {}
process : P {}
location : P : l0 {}
event : e {}
edge : P : l0 : l0 : e {}
";
