/// Bundled sample document the AI commands operate on. A full reader would
/// feed the currently open document here instead.
pub const SAMPLE_DOCUMENT: &str = "\
The Future of Mobile Reading\n\
\n\
Document reading on mobile devices has evolved from simple text display into \
a comprehensive experience. Modern readers combine offline dictionaries, \
vocabulary tracking, and intelligent assistance to help users understand what \
they read. The integration of these features demands careful attention to \
performance and accessibility.\n\
\n\
An offline dictionary gives readers instant definitions without a network \
connection. Saved vocabulary turns passive reading into active learning, \
since words a reader looks up repeatedly are the words worth studying. \
Artificial intelligence adds summarization and translation on top, while a \
local fallback keeps every feature usable when the service is unreachable.";
