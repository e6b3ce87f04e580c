//! Calendar documents shared by the codec tests.

pub const VEVENT_MINIMAL: &str = "\
BEGIN:VCALENDAR\r\n\
VERSION:2.0\r\n\
PRODID:-//Example Corp//Calendar//EN\r\n\
BEGIN:VEVENT\r\n\
UID:minimal@example.com\r\n\
DTSTAMP:20260101T000000Z\r\n\
DTSTART:20260115T100000Z\r\n\
END:VEVENT\r\n\
END:VCALENDAR\r\n";

pub const VEVENT_FULL: &str = "\
BEGIN:VCALENDAR\r\n\
VERSION:2.0\r\n\
PRODID:-//Example Corp//Calendar//EN\r\n\
CALSCALE:GREGORIAN\r\n\
METHOD:PUBLISH\r\n\
X-WR-CALNAME:Team\\, shared\r\n\
BEGIN:VEVENT\r\n\
UID:full@example.com\r\n\
DTSTAMP:20260101T000000Z\r\n\
DTSTART;TZID=Europe/Berlin:20260302T090000\r\n\
DTEND;TZID=Europe/Berlin:20260302T093000\r\n\
SUMMARY:Stand-up\r\n\
DESCRIPTION:Daily sync\\nBring blockers\\; keep it short\r\n\
LOCATION:Room 4\r\n\
STATUS:CONFIRMED\r\n\
CLASS:PUBLIC\r\n\
PRIORITY:5\r\n\
SEQUENCE:2\r\n\
CREATED:20251201T080000Z\r\n\
LAST-MODIFIED:20251202T080000Z\r\n\
URL:https://example.com/standup\r\n\
ORGANIZER;CN=\"Doe, Jane\":mailto:jane@example.com\r\n\
ATTENDEE;ROLE=REQ-PARTICIPANT;PARTSTAT=ACCEPTED:mailto:joe@example.com\r\n\
ATTENDEE;RSVP=TRUE:mailto:ann@example.com\r\n\
CATEGORIES:WORK,MEETING\r\n\
RRULE:FREQ=WEEKLY;BYDAY=MO,TU,WE,TH,FR;UNTIL=20261231T235959Z\r\n\
BEGIN:VALARM\r\n\
ACTION:DISPLAY\r\n\
TRIGGER:-PT10M\r\n\
DESCRIPTION:Stand-up soon\r\n\
END:VALARM\r\n\
END:VEVENT\r\n\
END:VCALENDAR\r\n";

pub const VTIMEZONE_BERLIN: &str = "\
BEGIN:VCALENDAR\r\n\
VERSION:2.0\r\n\
PRODID:-//Example Corp//Calendar//EN\r\n\
BEGIN:VTIMEZONE\r\n\
TZID:Europe/Berlin\r\n\
BEGIN:DAYLIGHT\r\n\
TZNAME:CEST\r\n\
DTSTART:19700329T020000\r\n\
RRULE:FREQ=YEARLY;BYMONTH=3;BYDAY=-1SU\r\n\
TZOFFSETFROM:+0100\r\n\
TZOFFSETTO:+0200\r\n\
END:DAYLIGHT\r\n\
BEGIN:STANDARD\r\n\
TZNAME:CET\r\n\
DTSTART:19701025T030000\r\n\
RRULE:FREQ=YEARLY;BYMONTH=10;BYDAY=-1SU\r\n\
TZOFFSETFROM:+0200\r\n\
TZOFFSETTO:+0100\r\n\
END:STANDARD\r\n\
END:VTIMEZONE\r\n\
END:VCALENDAR\r\n";

pub const MIXED_OBJECTS: &str = "\
BEGIN:VCALENDAR\r\n\
VERSION:2.0\r\n\
PRODID:-//Example Corp//Calendar//EN\r\n\
BEGIN:VTODO\r\n\
UID:todo@example.com\r\n\
DTSTAMP:20260101T000000Z\r\n\
DUE;VALUE=DATE:20260201\r\n\
SUMMARY:File report\r\n\
STATUS:NEEDS-ACTION\r\n\
PERCENT-COMPLETE:40\r\n\
END:VTODO\r\n\
BEGIN:VJOURNAL\r\n\
UID:journal@example.com\r\n\
DTSTAMP:20260101T000000Z\r\n\
DTSTART;VALUE=DATE:20260105\r\n\
SUMMARY:Retro notes\r\n\
CATEGORIES:NOTES\r\n\
END:VJOURNAL\r\n\
BEGIN:VFREEBUSY\r\n\
UID:fb@example.com\r\n\
DTSTAMP:20260101T000000Z\r\n\
DTSTART:20260110T000000Z\r\n\
DTEND:20260111T000000Z\r\n\
FREEBUSY;FBTYPE=BUSY:20260110T090000Z/20260110T100000Z\r\n\
END:VFREEBUSY\r\n\
END:VCALENDAR\r\n";

/// A calendar sprinkled with properties and blocks the codec does not know.
pub const WITH_UNKNOWN_CONTENT: &str = "\
BEGIN:VCALENDAR\r\n\
VERSION:2.0\r\n\
X-VENDOR-FLAG:on\r\n\
BEGIN:X-VENDOR-BLOCK\r\n\
BEGIN:VEVENT\r\n\
UID:hidden@example.com\r\n\
END:VEVENT\r\n\
END:X-VENDOR-BLOCK\r\n\
BEGIN:VEVENT\r\n\
UID:visible@example.com\r\n\
X-APPLE-TRAVEL-ADVISORY-BEHAVIOR:AUTOMATIC\r\n\
GEO:37.386013;-122.082932\r\n\
BEGIN:X-NESTED\r\n\
SUMMARY:not the event summary\r\n\
END:X-NESTED\r\n\
SUMMARY:Visible\r\n\
END:VEVENT\r\n\
END:VCALENDAR\r\n";
