pub mod group;
pub mod group_player;
pub mod session;
pub mod user;

/*
 Anyone can sign up with a unique email + username. Logging in mints a
 session row whose bearer token is handed back to the client.
 Any logged-in user can open a group; the creator becomes its master and
 is seeded into group_player as the first member, so a group is never
 empty. Other players join through the same join table later.
 */
