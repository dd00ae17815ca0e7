//! # Keyword Vocabulary
//!
//! The full PostgreSQL keyword list (from the server's kwlist.h), each tagged
//! with its grammatical category and whether it can appear as a column label
//! without a preceding AS.
//!
//! Categories follow the server grammar:
//!
//! - **Unreserved**: usable as any identifier (table, column, alias).
//! - **ColName**: usable as column/table names but not as function or type
//!   names (mostly type names with special syntax like `varchar`).
//! - **TypeFuncName**: usable as function or type names but not as
//!   column/table names (`left`, `like`, ...).
//! - **Reserved**: never usable as an identifier without quoting.
//!
//! Lookup goes through a perfect-hash map keyed by the lowercase keyword
//! text, so the lexer resolves keywords with a single probe after case
//! folding.

use phf::phf_map;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum KeywordCategory {
    Unreserved,
    ColName,
    TypeFuncName,
    Reserved,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Keyword {
    Abort,
    Absent,
    Absolute,
    Access,
    Action,
    Add,
    Admin,
    After,
    Aggregate,
    All,
    Also,
    Alter,
    Always,
    Analyse,
    Analyze,
    And,
    Any,
    Array,
    As,
    Asc,
    Asensitive,
    Assertion,
    Assignment,
    Asymmetric,
    At,
    Atomic,
    Attach,
    Attribute,
    Authorization,
    Backward,
    Before,
    Begin,
    Between,
    Bigint,
    Binary,
    Bit,
    Boolean,
    Both,
    Breadth,
    By,
    Cache,
    Call,
    Called,
    Cascade,
    Cascaded,
    Case,
    Cast,
    Catalog,
    Chain,
    Char,
    Character,
    Characteristics,
    Check,
    Checkpoint,
    Class,
    Close,
    Cluster,
    Coalesce,
    Collate,
    Collation,
    Column,
    Columns,
    Comment,
    Comments,
    Commit,
    Committed,
    Compression,
    Concurrently,
    Configuration,
    Conflict,
    Connection,
    Constraint,
    Constraints,
    Content,
    Continue,
    Conversion,
    Copy,
    Cost,
    Create,
    Cross,
    Csv,
    Cube,
    Current,
    CurrentCatalog,
    CurrentDate,
    CurrentRole,
    CurrentSchema,
    CurrentTime,
    CurrentTimestamp,
    CurrentUser,
    Cursor,
    Cycle,
    Data,
    Database,
    Day,
    Deallocate,
    Dec,
    Decimal,
    Declare,
    Default,
    Defaults,
    Deferrable,
    Deferred,
    Definer,
    Delete,
    Delimiter,
    Delimiters,
    Depends,
    Depth,
    Desc,
    Detach,
    Dictionary,
    Disable,
    Discard,
    Distinct,
    Do,
    Document,
    Domain,
    Double,
    Drop,
    Each,
    Else,
    Enable,
    Encoding,
    Encrypted,
    End,
    Enum,
    Escape,
    Event,
    Except,
    Exclude,
    Excluding,
    Exclusive,
    Execute,
    Exists,
    Explain,
    Expression,
    Extension,
    External,
    Extract,
    False,
    Family,
    Fetch,
    Filter,
    Finalize,
    First,
    Float,
    Following,
    For,
    Force,
    Foreign,
    Format,
    Forward,
    Freeze,
    From,
    Full,
    Function,
    Functions,
    Generated,
    Global,
    Grant,
    Granted,
    Greatest,
    Group,
    Grouping,
    Groups,
    Handler,
    Having,
    Header,
    Hold,
    Hour,
    Identity,
    If,
    Ilike,
    Immediate,
    Immutable,
    Implicit,
    Import,
    In,
    Include,
    Including,
    Increment,
    Indent,
    Index,
    Indexes,
    Inherit,
    Inherits,
    Initially,
    Inline,
    Inner,
    Inout,
    Input,
    Insensitive,
    Insert,
    Instead,
    Int,
    Integer,
    Intersect,
    Interval,
    Into,
    Invoker,
    Is,
    Isnull,
    Isolation,
    Join,
    Json,
    JsonArray,
    JsonArrayagg,
    JsonObject,
    JsonObjectagg,
    Key,
    Keys,
    Label,
    Language,
    Large,
    Last,
    Lateral,
    Leading,
    Leakproof,
    Least,
    Left,
    Level,
    Like,
    Limit,
    Listen,
    Load,
    Local,
    Localtime,
    Localtimestamp,
    Location,
    Lock,
    Locked,
    Logged,
    Mapping,
    Match,
    Matched,
    Materialized,
    Maxvalue,
    Merge,
    Method,
    Minute,
    Minvalue,
    Mode,
    Month,
    Move,
    Name,
    Names,
    National,
    Natural,
    Nchar,
    New,
    Next,
    Nfc,
    Nfd,
    Nfkc,
    Nfkd,
    No,
    None,
    Normalize,
    Normalized,
    Not,
    Nothing,
    Notify,
    Notnull,
    Nowait,
    Null,
    Nullif,
    Nulls,
    Numeric,
    Object,
    Of,
    Off,
    Offset,
    Oids,
    Old,
    On,
    Only,
    Operator,
    Option,
    Options,
    Or,
    Order,
    Ordinality,
    Others,
    Out,
    Outer,
    Over,
    Overlaps,
    Overlay,
    Overriding,
    Owned,
    Owner,
    Parallel,
    Parameter,
    Parser,
    Partial,
    Partition,
    Passing,
    Password,
    Path,
    Placing,
    Plans,
    Policy,
    Position,
    Preceding,
    Precision,
    Prepare,
    Prepared,
    Preserve,
    Primary,
    Prior,
    Privileges,
    Procedural,
    Procedure,
    Procedures,
    Program,
    Publication,
    Quote,
    Range,
    Read,
    Real,
    Reassign,
    Recheck,
    Recursive,
    Ref,
    References,
    Referencing,
    Refresh,
    Reindex,
    Relative,
    Release,
    Rename,
    Repeatable,
    Replace,
    Replica,
    Reset,
    Restart,
    Restrict,
    Return,
    Returning,
    Returns,
    Revoke,
    Right,
    Role,
    Rollback,
    Rollup,
    Routine,
    Routines,
    Row,
    Rows,
    Rule,
    Savepoint,
    Scalar,
    Schema,
    Schemas,
    Scroll,
    Search,
    Second,
    Security,
    Select,
    Sequence,
    Sequences,
    Serializable,
    Server,
    Session,
    SessionUser,
    Set,
    Setof,
    Sets,
    Share,
    Show,
    Similar,
    Simple,
    Skip,
    Smallint,
    Snapshot,
    Some,
    Sql,
    Stable,
    Standalone,
    Start,
    Statement,
    Statistics,
    Stdin,
    Stdout,
    Storage,
    Stored,
    Strict,
    Strip,
    Subscription,
    Substring,
    Support,
    Symmetric,
    Sysid,
    System,
    SystemUser,
    Table,
    Tables,
    Tablesample,
    Tablespace,
    Temp,
    Template,
    Temporary,
    Text,
    Then,
    Ties,
    Time,
    Timestamp,
    To,
    Trailing,
    Transaction,
    Transform,
    Treat,
    Trigger,
    Trim,
    True,
    Truncate,
    Trusted,
    Type,
    Types,
    Uescape,
    Unbounded,
    Uncommitted,
    Unencrypted,
    Union,
    Unique,
    Unknown,
    Unlisten,
    Unlogged,
    Until,
    Update,
    User,
    Using,
    Vacuum,
    Valid,
    Validate,
    Validator,
    Value,
    Values,
    Varchar,
    Variadic,
    Varying,
    Verbose,
    Version,
    View,
    Views,
    Volatile,
    When,
    Where,
    Whitespace,
    Window,
    With,
    Within,
    Without,
    Work,
    Wrapper,
    Write,
    Xml,
    Xmlattributes,
    Xmlconcat,
    Xmlelement,
    Xmlexists,
    Xmlforest,
    Xmlnamespaces,
    Xmlparse,
    Xmlpi,
    Xmlroot,
    Xmlserialize,
    Xmltable,
    Year,
    Yes,
    Zone,
}

pub static KEYWORDS: phf::Map<&'static str, Keyword> = phf_map! {
    "abort" => Keyword::Abort,
    "absent" => Keyword::Absent,
    "absolute" => Keyword::Absolute,
    "access" => Keyword::Access,
    "action" => Keyword::Action,
    "add" => Keyword::Add,
    "admin" => Keyword::Admin,
    "after" => Keyword::After,
    "aggregate" => Keyword::Aggregate,
    "all" => Keyword::All,
    "also" => Keyword::Also,
    "alter" => Keyword::Alter,
    "always" => Keyword::Always,
    "analyse" => Keyword::Analyse,
    "analyze" => Keyword::Analyze,
    "and" => Keyword::And,
    "any" => Keyword::Any,
    "array" => Keyword::Array,
    "as" => Keyword::As,
    "asc" => Keyword::Asc,
    "asensitive" => Keyword::Asensitive,
    "assertion" => Keyword::Assertion,
    "assignment" => Keyword::Assignment,
    "asymmetric" => Keyword::Asymmetric,
    "at" => Keyword::At,
    "atomic" => Keyword::Atomic,
    "attach" => Keyword::Attach,
    "attribute" => Keyword::Attribute,
    "authorization" => Keyword::Authorization,
    "backward" => Keyword::Backward,
    "before" => Keyword::Before,
    "begin" => Keyword::Begin,
    "between" => Keyword::Between,
    "bigint" => Keyword::Bigint,
    "binary" => Keyword::Binary,
    "bit" => Keyword::Bit,
    "boolean" => Keyword::Boolean,
    "both" => Keyword::Both,
    "breadth" => Keyword::Breadth,
    "by" => Keyword::By,
    "cache" => Keyword::Cache,
    "call" => Keyword::Call,
    "called" => Keyword::Called,
    "cascade" => Keyword::Cascade,
    "cascaded" => Keyword::Cascaded,
    "case" => Keyword::Case,
    "cast" => Keyword::Cast,
    "catalog" => Keyword::Catalog,
    "chain" => Keyword::Chain,
    "char" => Keyword::Char,
    "character" => Keyword::Character,
    "characteristics" => Keyword::Characteristics,
    "check" => Keyword::Check,
    "checkpoint" => Keyword::Checkpoint,
    "class" => Keyword::Class,
    "close" => Keyword::Close,
    "cluster" => Keyword::Cluster,
    "coalesce" => Keyword::Coalesce,
    "collate" => Keyword::Collate,
    "collation" => Keyword::Collation,
    "column" => Keyword::Column,
    "columns" => Keyword::Columns,
    "comment" => Keyword::Comment,
    "comments" => Keyword::Comments,
    "commit" => Keyword::Commit,
    "committed" => Keyword::Committed,
    "compression" => Keyword::Compression,
    "concurrently" => Keyword::Concurrently,
    "configuration" => Keyword::Configuration,
    "conflict" => Keyword::Conflict,
    "connection" => Keyword::Connection,
    "constraint" => Keyword::Constraint,
    "constraints" => Keyword::Constraints,
    "content" => Keyword::Content,
    "continue" => Keyword::Continue,
    "conversion" => Keyword::Conversion,
    "copy" => Keyword::Copy,
    "cost" => Keyword::Cost,
    "create" => Keyword::Create,
    "cross" => Keyword::Cross,
    "csv" => Keyword::Csv,
    "cube" => Keyword::Cube,
    "current" => Keyword::Current,
    "current_catalog" => Keyword::CurrentCatalog,
    "current_date" => Keyword::CurrentDate,
    "current_role" => Keyword::CurrentRole,
    "current_schema" => Keyword::CurrentSchema,
    "current_time" => Keyword::CurrentTime,
    "current_timestamp" => Keyword::CurrentTimestamp,
    "current_user" => Keyword::CurrentUser,
    "cursor" => Keyword::Cursor,
    "cycle" => Keyword::Cycle,
    "data" => Keyword::Data,
    "database" => Keyword::Database,
    "day" => Keyword::Day,
    "deallocate" => Keyword::Deallocate,
    "dec" => Keyword::Dec,
    "decimal" => Keyword::Decimal,
    "declare" => Keyword::Declare,
    "default" => Keyword::Default,
    "defaults" => Keyword::Defaults,
    "deferrable" => Keyword::Deferrable,
    "deferred" => Keyword::Deferred,
    "definer" => Keyword::Definer,
    "delete" => Keyword::Delete,
    "delimiter" => Keyword::Delimiter,
    "delimiters" => Keyword::Delimiters,
    "depends" => Keyword::Depends,
    "depth" => Keyword::Depth,
    "desc" => Keyword::Desc,
    "detach" => Keyword::Detach,
    "dictionary" => Keyword::Dictionary,
    "disable" => Keyword::Disable,
    "discard" => Keyword::Discard,
    "distinct" => Keyword::Distinct,
    "do" => Keyword::Do,
    "document" => Keyword::Document,
    "domain" => Keyword::Domain,
    "double" => Keyword::Double,
    "drop" => Keyword::Drop,
    "each" => Keyword::Each,
    "else" => Keyword::Else,
    "enable" => Keyword::Enable,
    "encoding" => Keyword::Encoding,
    "encrypted" => Keyword::Encrypted,
    "end" => Keyword::End,
    "enum" => Keyword::Enum,
    "escape" => Keyword::Escape,
    "event" => Keyword::Event,
    "except" => Keyword::Except,
    "exclude" => Keyword::Exclude,
    "excluding" => Keyword::Excluding,
    "exclusive" => Keyword::Exclusive,
    "execute" => Keyword::Execute,
    "exists" => Keyword::Exists,
    "explain" => Keyword::Explain,
    "expression" => Keyword::Expression,
    "extension" => Keyword::Extension,
    "external" => Keyword::External,
    "extract" => Keyword::Extract,
    "false" => Keyword::False,
    "family" => Keyword::Family,
    "fetch" => Keyword::Fetch,
    "filter" => Keyword::Filter,
    "finalize" => Keyword::Finalize,
    "first" => Keyword::First,
    "float" => Keyword::Float,
    "following" => Keyword::Following,
    "for" => Keyword::For,
    "force" => Keyword::Force,
    "foreign" => Keyword::Foreign,
    "format" => Keyword::Format,
    "forward" => Keyword::Forward,
    "freeze" => Keyword::Freeze,
    "from" => Keyword::From,
    "full" => Keyword::Full,
    "function" => Keyword::Function,
    "functions" => Keyword::Functions,
    "generated" => Keyword::Generated,
    "global" => Keyword::Global,
    "grant" => Keyword::Grant,
    "granted" => Keyword::Granted,
    "greatest" => Keyword::Greatest,
    "group" => Keyword::Group,
    "grouping" => Keyword::Grouping,
    "groups" => Keyword::Groups,
    "handler" => Keyword::Handler,
    "having" => Keyword::Having,
    "header" => Keyword::Header,
    "hold" => Keyword::Hold,
    "hour" => Keyword::Hour,
    "identity" => Keyword::Identity,
    "if" => Keyword::If,
    "ilike" => Keyword::Ilike,
    "immediate" => Keyword::Immediate,
    "immutable" => Keyword::Immutable,
    "implicit" => Keyword::Implicit,
    "import" => Keyword::Import,
    "in" => Keyword::In,
    "include" => Keyword::Include,
    "including" => Keyword::Including,
    "increment" => Keyword::Increment,
    "indent" => Keyword::Indent,
    "index" => Keyword::Index,
    "indexes" => Keyword::Indexes,
    "inherit" => Keyword::Inherit,
    "inherits" => Keyword::Inherits,
    "initially" => Keyword::Initially,
    "inline" => Keyword::Inline,
    "inner" => Keyword::Inner,
    "inout" => Keyword::Inout,
    "input" => Keyword::Input,
    "insensitive" => Keyword::Insensitive,
    "insert" => Keyword::Insert,
    "instead" => Keyword::Instead,
    "int" => Keyword::Int,
    "integer" => Keyword::Integer,
    "intersect" => Keyword::Intersect,
    "interval" => Keyword::Interval,
    "into" => Keyword::Into,
    "invoker" => Keyword::Invoker,
    "is" => Keyword::Is,
    "isnull" => Keyword::Isnull,
    "isolation" => Keyword::Isolation,
    "join" => Keyword::Join,
    "json" => Keyword::Json,
    "json_array" => Keyword::JsonArray,
    "json_arrayagg" => Keyword::JsonArrayagg,
    "json_object" => Keyword::JsonObject,
    "json_objectagg" => Keyword::JsonObjectagg,
    "key" => Keyword::Key,
    "keys" => Keyword::Keys,
    "label" => Keyword::Label,
    "language" => Keyword::Language,
    "large" => Keyword::Large,
    "last" => Keyword::Last,
    "lateral" => Keyword::Lateral,
    "leading" => Keyword::Leading,
    "leakproof" => Keyword::Leakproof,
    "least" => Keyword::Least,
    "left" => Keyword::Left,
    "level" => Keyword::Level,
    "like" => Keyword::Like,
    "limit" => Keyword::Limit,
    "listen" => Keyword::Listen,
    "load" => Keyword::Load,
    "local" => Keyword::Local,
    "localtime" => Keyword::Localtime,
    "localtimestamp" => Keyword::Localtimestamp,
    "location" => Keyword::Location,
    "lock" => Keyword::Lock,
    "locked" => Keyword::Locked,
    "logged" => Keyword::Logged,
    "mapping" => Keyword::Mapping,
    "match" => Keyword::Match,
    "matched" => Keyword::Matched,
    "materialized" => Keyword::Materialized,
    "maxvalue" => Keyword::Maxvalue,
    "merge" => Keyword::Merge,
    "method" => Keyword::Method,
    "minute" => Keyword::Minute,
    "minvalue" => Keyword::Minvalue,
    "mode" => Keyword::Mode,
    "month" => Keyword::Month,
    "move" => Keyword::Move,
    "name" => Keyword::Name,
    "names" => Keyword::Names,
    "national" => Keyword::National,
    "natural" => Keyword::Natural,
    "nchar" => Keyword::Nchar,
    "new" => Keyword::New,
    "next" => Keyword::Next,
    "nfc" => Keyword::Nfc,
    "nfd" => Keyword::Nfd,
    "nfkc" => Keyword::Nfkc,
    "nfkd" => Keyword::Nfkd,
    "no" => Keyword::No,
    "none" => Keyword::None,
    "normalize" => Keyword::Normalize,
    "normalized" => Keyword::Normalized,
    "not" => Keyword::Not,
    "nothing" => Keyword::Nothing,
    "notify" => Keyword::Notify,
    "notnull" => Keyword::Notnull,
    "nowait" => Keyword::Nowait,
    "null" => Keyword::Null,
    "nullif" => Keyword::Nullif,
    "nulls" => Keyword::Nulls,
    "numeric" => Keyword::Numeric,
    "object" => Keyword::Object,
    "of" => Keyword::Of,
    "off" => Keyword::Off,
    "offset" => Keyword::Offset,
    "oids" => Keyword::Oids,
    "old" => Keyword::Old,
    "on" => Keyword::On,
    "only" => Keyword::Only,
    "operator" => Keyword::Operator,
    "option" => Keyword::Option,
    "options" => Keyword::Options,
    "or" => Keyword::Or,
    "order" => Keyword::Order,
    "ordinality" => Keyword::Ordinality,
    "others" => Keyword::Others,
    "out" => Keyword::Out,
    "outer" => Keyword::Outer,
    "over" => Keyword::Over,
    "overlaps" => Keyword::Overlaps,
    "overlay" => Keyword::Overlay,
    "overriding" => Keyword::Overriding,
    "owned" => Keyword::Owned,
    "owner" => Keyword::Owner,
    "parallel" => Keyword::Parallel,
    "parameter" => Keyword::Parameter,
    "parser" => Keyword::Parser,
    "partial" => Keyword::Partial,
    "partition" => Keyword::Partition,
    "passing" => Keyword::Passing,
    "password" => Keyword::Password,
    "path" => Keyword::Path,
    "placing" => Keyword::Placing,
    "plans" => Keyword::Plans,
    "policy" => Keyword::Policy,
    "position" => Keyword::Position,
    "preceding" => Keyword::Preceding,
    "precision" => Keyword::Precision,
    "prepare" => Keyword::Prepare,
    "prepared" => Keyword::Prepared,
    "preserve" => Keyword::Preserve,
    "primary" => Keyword::Primary,
    "prior" => Keyword::Prior,
    "privileges" => Keyword::Privileges,
    "procedural" => Keyword::Procedural,
    "procedure" => Keyword::Procedure,
    "procedures" => Keyword::Procedures,
    "program" => Keyword::Program,
    "publication" => Keyword::Publication,
    "quote" => Keyword::Quote,
    "range" => Keyword::Range,
    "read" => Keyword::Read,
    "real" => Keyword::Real,
    "reassign" => Keyword::Reassign,
    "recheck" => Keyword::Recheck,
    "recursive" => Keyword::Recursive,
    "ref" => Keyword::Ref,
    "references" => Keyword::References,
    "referencing" => Keyword::Referencing,
    "refresh" => Keyword::Refresh,
    "reindex" => Keyword::Reindex,
    "relative" => Keyword::Relative,
    "release" => Keyword::Release,
    "rename" => Keyword::Rename,
    "repeatable" => Keyword::Repeatable,
    "replace" => Keyword::Replace,
    "replica" => Keyword::Replica,
    "reset" => Keyword::Reset,
    "restart" => Keyword::Restart,
    "restrict" => Keyword::Restrict,
    "return" => Keyword::Return,
    "returning" => Keyword::Returning,
    "returns" => Keyword::Returns,
    "revoke" => Keyword::Revoke,
    "right" => Keyword::Right,
    "role" => Keyword::Role,
    "rollback" => Keyword::Rollback,
    "rollup" => Keyword::Rollup,
    "routine" => Keyword::Routine,
    "routines" => Keyword::Routines,
    "row" => Keyword::Row,
    "rows" => Keyword::Rows,
    "rule" => Keyword::Rule,
    "savepoint" => Keyword::Savepoint,
    "scalar" => Keyword::Scalar,
    "schema" => Keyword::Schema,
    "schemas" => Keyword::Schemas,
    "scroll" => Keyword::Scroll,
    "search" => Keyword::Search,
    "second" => Keyword::Second,
    "security" => Keyword::Security,
    "select" => Keyword::Select,
    "sequence" => Keyword::Sequence,
    "sequences" => Keyword::Sequences,
    "serializable" => Keyword::Serializable,
    "server" => Keyword::Server,
    "session" => Keyword::Session,
    "session_user" => Keyword::SessionUser,
    "set" => Keyword::Set,
    "setof" => Keyword::Setof,
    "sets" => Keyword::Sets,
    "share" => Keyword::Share,
    "show" => Keyword::Show,
    "similar" => Keyword::Similar,
    "simple" => Keyword::Simple,
    "skip" => Keyword::Skip,
    "smallint" => Keyword::Smallint,
    "snapshot" => Keyword::Snapshot,
    "some" => Keyword::Some,
    "sql" => Keyword::Sql,
    "stable" => Keyword::Stable,
    "standalone" => Keyword::Standalone,
    "start" => Keyword::Start,
    "statement" => Keyword::Statement,
    "statistics" => Keyword::Statistics,
    "stdin" => Keyword::Stdin,
    "stdout" => Keyword::Stdout,
    "storage" => Keyword::Storage,
    "stored" => Keyword::Stored,
    "strict" => Keyword::Strict,
    "strip" => Keyword::Strip,
    "subscription" => Keyword::Subscription,
    "substring" => Keyword::Substring,
    "support" => Keyword::Support,
    "symmetric" => Keyword::Symmetric,
    "sysid" => Keyword::Sysid,
    "system" => Keyword::System,
    "system_user" => Keyword::SystemUser,
    "table" => Keyword::Table,
    "tables" => Keyword::Tables,
    "tablesample" => Keyword::Tablesample,
    "tablespace" => Keyword::Tablespace,
    "temp" => Keyword::Temp,
    "template" => Keyword::Template,
    "temporary" => Keyword::Temporary,
    "text" => Keyword::Text,
    "then" => Keyword::Then,
    "ties" => Keyword::Ties,
    "time" => Keyword::Time,
    "timestamp" => Keyword::Timestamp,
    "to" => Keyword::To,
    "trailing" => Keyword::Trailing,
    "transaction" => Keyword::Transaction,
    "transform" => Keyword::Transform,
    "treat" => Keyword::Treat,
    "trigger" => Keyword::Trigger,
    "trim" => Keyword::Trim,
    "true" => Keyword::True,
    "truncate" => Keyword::Truncate,
    "trusted" => Keyword::Trusted,
    "type" => Keyword::Type,
    "types" => Keyword::Types,
    "uescape" => Keyword::Uescape,
    "unbounded" => Keyword::Unbounded,
    "uncommitted" => Keyword::Uncommitted,
    "unencrypted" => Keyword::Unencrypted,
    "union" => Keyword::Union,
    "unique" => Keyword::Unique,
    "unknown" => Keyword::Unknown,
    "unlisten" => Keyword::Unlisten,
    "unlogged" => Keyword::Unlogged,
    "until" => Keyword::Until,
    "update" => Keyword::Update,
    "user" => Keyword::User,
    "using" => Keyword::Using,
    "vacuum" => Keyword::Vacuum,
    "valid" => Keyword::Valid,
    "validate" => Keyword::Validate,
    "validator" => Keyword::Validator,
    "value" => Keyword::Value,
    "values" => Keyword::Values,
    "varchar" => Keyword::Varchar,
    "variadic" => Keyword::Variadic,
    "varying" => Keyword::Varying,
    "verbose" => Keyword::Verbose,
    "version" => Keyword::Version,
    "view" => Keyword::View,
    "views" => Keyword::Views,
    "volatile" => Keyword::Volatile,
    "when" => Keyword::When,
    "where" => Keyword::Where,
    "whitespace" => Keyword::Whitespace,
    "window" => Keyword::Window,
    "with" => Keyword::With,
    "within" => Keyword::Within,
    "without" => Keyword::Without,
    "work" => Keyword::Work,
    "wrapper" => Keyword::Wrapper,
    "write" => Keyword::Write,
    "xml" => Keyword::Xml,
    "xmlattributes" => Keyword::Xmlattributes,
    "xmlconcat" => Keyword::Xmlconcat,
    "xmlelement" => Keyword::Xmlelement,
    "xmlexists" => Keyword::Xmlexists,
    "xmlforest" => Keyword::Xmlforest,
    "xmlnamespaces" => Keyword::Xmlnamespaces,
    "xmlparse" => Keyword::Xmlparse,
    "xmlpi" => Keyword::Xmlpi,
    "xmlroot" => Keyword::Xmlroot,
    "xmlserialize" => Keyword::Xmlserialize,
    "xmltable" => Keyword::Xmltable,
    "year" => Keyword::Year,
    "yes" => Keyword::Yes,
    "zone" => Keyword::Zone,
};

impl Keyword {
    /// Resolves lowercase identifier text to a keyword, if it is one.
    pub fn lookup(folded: &str) -> Option<Keyword> {
        KEYWORDS.get(folded).copied()
    }

    pub fn category(self) -> KeywordCategory {
        match self {
            Keyword::Abort
            | Keyword::Absent
            | Keyword::Absolute
            | Keyword::Access
            | Keyword::Action
            | Keyword::Add
            | Keyword::Admin
            | Keyword::After
            | Keyword::Aggregate
            | Keyword::Also
            | Keyword::Alter
            | Keyword::Always
            | Keyword::Asensitive
            | Keyword::Assertion
            | Keyword::Assignment
            | Keyword::At
            | Keyword::Atomic
            | Keyword::Attach
            | Keyword::Attribute
            | Keyword::Backward
            | Keyword::Before
            | Keyword::Begin
            | Keyword::Breadth
            | Keyword::By
            | Keyword::Cache
            | Keyword::Call
            | Keyword::Called
            | Keyword::Cascade
            | Keyword::Cascaded
            | Keyword::Catalog
            | Keyword::Chain
            | Keyword::Characteristics
            | Keyword::Checkpoint
            | Keyword::Class
            | Keyword::Close
            | Keyword::Cluster
            | Keyword::Columns
            | Keyword::Comment
            | Keyword::Comments
            | Keyword::Commit
            | Keyword::Committed
            | Keyword::Compression
            | Keyword::Configuration
            | Keyword::Conflict
            | Keyword::Connection
            | Keyword::Constraints
            | Keyword::Content
            | Keyword::Continue
            | Keyword::Conversion
            | Keyword::Copy
            | Keyword::Cost
            | Keyword::Csv
            | Keyword::Cube
            | Keyword::Current
            | Keyword::Cursor
            | Keyword::Cycle
            | Keyword::Data
            | Keyword::Database
            | Keyword::Day
            | Keyword::Deallocate
            | Keyword::Declare
            | Keyword::Defaults
            | Keyword::Deferred
            | Keyword::Definer
            | Keyword::Delete
            | Keyword::Delimiter
            | Keyword::Delimiters
            | Keyword::Depends
            | Keyword::Depth
            | Keyword::Detach
            | Keyword::Dictionary
            | Keyword::Disable
            | Keyword::Discard
            | Keyword::Document
            | Keyword::Domain
            | Keyword::Double
            | Keyword::Drop
            | Keyword::Each
            | Keyword::Enable
            | Keyword::Encoding
            | Keyword::Encrypted
            | Keyword::Enum
            | Keyword::Escape
            | Keyword::Event
            | Keyword::Exclude
            | Keyword::Excluding
            | Keyword::Exclusive
            | Keyword::Execute
            | Keyword::Explain
            | Keyword::Expression
            | Keyword::Extension
            | Keyword::External
            | Keyword::Family
            | Keyword::Filter
            | Keyword::Finalize
            | Keyword::First
            | Keyword::Following
            | Keyword::Force
            | Keyword::Format
            | Keyword::Forward
            | Keyword::Function
            | Keyword::Functions
            | Keyword::Generated
            | Keyword::Global
            | Keyword::Granted
            | Keyword::Groups
            | Keyword::Handler
            | Keyword::Header
            | Keyword::Hold
            | Keyword::Hour
            | Keyword::Identity
            | Keyword::If
            | Keyword::Immediate
            | Keyword::Immutable
            | Keyword::Implicit
            | Keyword::Import
            | Keyword::Include
            | Keyword::Including
            | Keyword::Increment
            | Keyword::Indent
            | Keyword::Index
            | Keyword::Indexes
            | Keyword::Inherit
            | Keyword::Inherits
            | Keyword::Inline
            | Keyword::Input
            | Keyword::Insensitive
            | Keyword::Insert
            | Keyword::Instead
            | Keyword::Invoker
            | Keyword::Isolation
            | Keyword::Json
            | Keyword::Key
            | Keyword::Keys
            | Keyword::Label
            | Keyword::Language
            | Keyword::Large
            | Keyword::Last
            | Keyword::Leakproof
            | Keyword::Level
            | Keyword::Listen
            | Keyword::Load
            | Keyword::Local
            | Keyword::Location
            | Keyword::Lock
            | Keyword::Locked
            | Keyword::Logged
            | Keyword::Mapping
            | Keyword::Match
            | Keyword::Matched
            | Keyword::Materialized
            | Keyword::Maxvalue
            | Keyword::Merge
            | Keyword::Method
            | Keyword::Minute
            | Keyword::Minvalue
            | Keyword::Mode
            | Keyword::Month
            | Keyword::Move
            | Keyword::Name
            | Keyword::Names
            | Keyword::New
            | Keyword::Next
            | Keyword::Nfc
            | Keyword::Nfd
            | Keyword::Nfkc
            | Keyword::Nfkd
            | Keyword::No
            | Keyword::Normalized
            | Keyword::Nothing
            | Keyword::Notify
            | Keyword::Nowait
            | Keyword::Nulls
            | Keyword::Object
            | Keyword::Of
            | Keyword::Off
            | Keyword::Oids
            | Keyword::Old
            | Keyword::Operator
            | Keyword::Option
            | Keyword::Options
            | Keyword::Ordinality
            | Keyword::Others
            | Keyword::Over
            | Keyword::Overriding
            | Keyword::Owned
            | Keyword::Owner
            | Keyword::Parallel
            | Keyword::Parameter
            | Keyword::Parser
            | Keyword::Partial
            | Keyword::Partition
            | Keyword::Passing
            | Keyword::Password
            | Keyword::Path
            | Keyword::Plans
            | Keyword::Policy
            | Keyword::Preceding
            | Keyword::Prepare
            | Keyword::Prepared
            | Keyword::Preserve
            | Keyword::Prior
            | Keyword::Privileges
            | Keyword::Procedural
            | Keyword::Procedure
            | Keyword::Procedures
            | Keyword::Program
            | Keyword::Publication
            | Keyword::Quote
            | Keyword::Range
            | Keyword::Read
            | Keyword::Reassign
            | Keyword::Recheck
            | Keyword::Recursive
            | Keyword::Ref
            | Keyword::Referencing
            | Keyword::Refresh
            | Keyword::Reindex
            | Keyword::Relative
            | Keyword::Release
            | Keyword::Rename
            | Keyword::Repeatable
            | Keyword::Replace
            | Keyword::Replica
            | Keyword::Reset
            | Keyword::Restart
            | Keyword::Restrict
            | Keyword::Return
            | Keyword::Returns
            | Keyword::Revoke
            | Keyword::Role
            | Keyword::Rollback
            | Keyword::Rollup
            | Keyword::Routine
            | Keyword::Routines
            | Keyword::Rows
            | Keyword::Rule
            | Keyword::Savepoint
            | Keyword::Scalar
            | Keyword::Schema
            | Keyword::Schemas
            | Keyword::Scroll
            | Keyword::Search
            | Keyword::Second
            | Keyword::Security
            | Keyword::Sequence
            | Keyword::Sequences
            | Keyword::Serializable
            | Keyword::Server
            | Keyword::Session
            | Keyword::Set
            | Keyword::Sets
            | Keyword::Share
            | Keyword::Show
            | Keyword::Simple
            | Keyword::Skip
            | Keyword::Snapshot
            | Keyword::Sql
            | Keyword::Stable
            | Keyword::Standalone
            | Keyword::Start
            | Keyword::Statement
            | Keyword::Statistics
            | Keyword::Stdin
            | Keyword::Stdout
            | Keyword::Storage
            | Keyword::Stored
            | Keyword::Strict
            | Keyword::Strip
            | Keyword::Subscription
            | Keyword::Support
            | Keyword::Sysid
            | Keyword::System
            | Keyword::Tables
            | Keyword::Tablespace
            | Keyword::Temp
            | Keyword::Template
            | Keyword::Temporary
            | Keyword::Text
            | Keyword::Ties
            | Keyword::Transaction
            | Keyword::Transform
            | Keyword::Trigger
            | Keyword::Truncate
            | Keyword::Trusted
            | Keyword::Type
            | Keyword::Types
            | Keyword::Uescape
            | Keyword::Unbounded
            | Keyword::Uncommitted
            | Keyword::Unencrypted
            | Keyword::Unknown
            | Keyword::Unlisten
            | Keyword::Unlogged
            | Keyword::Until
            | Keyword::Update
            | Keyword::Vacuum
            | Keyword::Valid
            | Keyword::Validate
            | Keyword::Validator
            | Keyword::Value
            | Keyword::Varying
            | Keyword::Version
            | Keyword::View
            | Keyword::Views
            | Keyword::Volatile
            | Keyword::Whitespace
            | Keyword::Within
            | Keyword::Without
            | Keyword::Work
            | Keyword::Wrapper
            | Keyword::Write
            | Keyword::Xml
            | Keyword::Year
            | Keyword::Yes
            | Keyword::Zone => KeywordCategory::Unreserved,
            Keyword::Between
            | Keyword::Bigint
            | Keyword::Bit
            | Keyword::Boolean
            | Keyword::Char
            | Keyword::Character
            | Keyword::Coalesce
            | Keyword::Dec
            | Keyword::Decimal
            | Keyword::Exists
            | Keyword::Extract
            | Keyword::Float
            | Keyword::Greatest
            | Keyword::Grouping
            | Keyword::Inout
            | Keyword::Int
            | Keyword::Integer
            | Keyword::Interval
            | Keyword::JsonArray
            | Keyword::JsonArrayagg
            | Keyword::JsonObject
            | Keyword::JsonObjectagg
            | Keyword::Least
            | Keyword::National
            | Keyword::Nchar
            | Keyword::None
            | Keyword::Normalize
            | Keyword::Nullif
            | Keyword::Numeric
            | Keyword::Out
            | Keyword::Overlay
            | Keyword::Position
            | Keyword::Precision
            | Keyword::Real
            | Keyword::Row
            | Keyword::Setof
            | Keyword::Smallint
            | Keyword::Substring
            | Keyword::Time
            | Keyword::Timestamp
            | Keyword::Treat
            | Keyword::Trim
            | Keyword::Values
            | Keyword::Varchar
            | Keyword::Xmlattributes
            | Keyword::Xmlconcat
            | Keyword::Xmlelement
            | Keyword::Xmlexists
            | Keyword::Xmlforest
            | Keyword::Xmlnamespaces
            | Keyword::Xmlparse
            | Keyword::Xmlpi
            | Keyword::Xmlroot
            | Keyword::Xmlserialize
            | Keyword::Xmltable => KeywordCategory::ColName,
            Keyword::Authorization
            | Keyword::Binary
            | Keyword::Collation
            | Keyword::Concurrently
            | Keyword::Cross
            | Keyword::CurrentSchema
            | Keyword::Freeze
            | Keyword::Full
            | Keyword::Ilike
            | Keyword::Inner
            | Keyword::Is
            | Keyword::Isnull
            | Keyword::Join
            | Keyword::Left
            | Keyword::Like
            | Keyword::Natural
            | Keyword::Notnull
            | Keyword::Outer
            | Keyword::Overlaps
            | Keyword::Right
            | Keyword::Similar
            | Keyword::Tablesample
            | Keyword::Verbose => KeywordCategory::TypeFuncName,
            Keyword::All
            | Keyword::Analyse
            | Keyword::Analyze
            | Keyword::And
            | Keyword::Any
            | Keyword::Array
            | Keyword::As
            | Keyword::Asc
            | Keyword::Asymmetric
            | Keyword::Both
            | Keyword::Case
            | Keyword::Cast
            | Keyword::Check
            | Keyword::Collate
            | Keyword::Column
            | Keyword::Constraint
            | Keyword::Create
            | Keyword::CurrentCatalog
            | Keyword::CurrentDate
            | Keyword::CurrentRole
            | Keyword::CurrentTime
            | Keyword::CurrentTimestamp
            | Keyword::CurrentUser
            | Keyword::Default
            | Keyword::Deferrable
            | Keyword::Desc
            | Keyword::Distinct
            | Keyword::Do
            | Keyword::Else
            | Keyword::End
            | Keyword::Except
            | Keyword::False
            | Keyword::Fetch
            | Keyword::For
            | Keyword::Foreign
            | Keyword::From
            | Keyword::Grant
            | Keyword::Group
            | Keyword::Having
            | Keyword::In
            | Keyword::Initially
            | Keyword::Intersect
            | Keyword::Into
            | Keyword::Lateral
            | Keyword::Leading
            | Keyword::Limit
            | Keyword::Localtime
            | Keyword::Localtimestamp
            | Keyword::Not
            | Keyword::Null
            | Keyword::Offset
            | Keyword::On
            | Keyword::Only
            | Keyword::Or
            | Keyword::Order
            | Keyword::Placing
            | Keyword::Primary
            | Keyword::References
            | Keyword::Returning
            | Keyword::Select
            | Keyword::SessionUser
            | Keyword::Some
            | Keyword::Symmetric
            | Keyword::SystemUser
            | Keyword::Table
            | Keyword::Then
            | Keyword::To
            | Keyword::Trailing
            | Keyword::True
            | Keyword::Union
            | Keyword::Unique
            | Keyword::User
            | Keyword::Using
            | Keyword::Variadic
            | Keyword::When
            | Keyword::Where
            | Keyword::Window
            | Keyword::With => KeywordCategory::Reserved,
        }
    }

    /// Whether this keyword may be used as a column label without AS
    /// (bare_label from kwlist.h).
    pub fn can_be_bare_label(self) -> bool {
        !matches!(
            self,
            Keyword::Array
                | Keyword::As
                | Keyword::Char
                | Keyword::Character
                | Keyword::Create
                | Keyword::Day
                | Keyword::Except
                | Keyword::Fetch
                | Keyword::Filter
                | Keyword::For
                | Keyword::From
                | Keyword::Grant
                | Keyword::Group
                | Keyword::Having
                | Keyword::Hour
                | Keyword::Intersect
                | Keyword::Into
                | Keyword::Isnull
                | Keyword::Limit
                | Keyword::Minute
                | Keyword::Month
                | Keyword::Notnull
                | Keyword::Offset
                | Keyword::On
                | Keyword::Order
                | Keyword::Over
                | Keyword::Overlaps
                | Keyword::Precision
                | Keyword::Returning
                | Keyword::Second
                | Keyword::To
                | Keyword::Union
                | Keyword::Varying
                | Keyword::Where
                | Keyword::Window
                | Keyword::With
                | Keyword::Within
                | Keyword::Without
                | Keyword::Year
        )
    }

    /// The lowercase SQL spelling of the keyword.
    pub fn as_str(self) -> &'static str {
        match self {
            Keyword::Abort => "abort",
            Keyword::Absent => "absent",
            Keyword::Absolute => "absolute",
            Keyword::Access => "access",
            Keyword::Action => "action",
            Keyword::Add => "add",
            Keyword::Admin => "admin",
            Keyword::After => "after",
            Keyword::Aggregate => "aggregate",
            Keyword::All => "all",
            Keyword::Also => "also",
            Keyword::Alter => "alter",
            Keyword::Always => "always",
            Keyword::Analyse => "analyse",
            Keyword::Analyze => "analyze",
            Keyword::And => "and",
            Keyword::Any => "any",
            Keyword::Array => "array",
            Keyword::As => "as",
            Keyword::Asc => "asc",
            Keyword::Asensitive => "asensitive",
            Keyword::Assertion => "assertion",
            Keyword::Assignment => "assignment",
            Keyword::Asymmetric => "asymmetric",
            Keyword::At => "at",
            Keyword::Atomic => "atomic",
            Keyword::Attach => "attach",
            Keyword::Attribute => "attribute",
            Keyword::Authorization => "authorization",
            Keyword::Backward => "backward",
            Keyword::Before => "before",
            Keyword::Begin => "begin",
            Keyword::Between => "between",
            Keyword::Bigint => "bigint",
            Keyword::Binary => "binary",
            Keyword::Bit => "bit",
            Keyword::Boolean => "boolean",
            Keyword::Both => "both",
            Keyword::Breadth => "breadth",
            Keyword::By => "by",
            Keyword::Cache => "cache",
            Keyword::Call => "call",
            Keyword::Called => "called",
            Keyword::Cascade => "cascade",
            Keyword::Cascaded => "cascaded",
            Keyword::Case => "case",
            Keyword::Cast => "cast",
            Keyword::Catalog => "catalog",
            Keyword::Chain => "chain",
            Keyword::Char => "char",
            Keyword::Character => "character",
            Keyword::Characteristics => "characteristics",
            Keyword::Check => "check",
            Keyword::Checkpoint => "checkpoint",
            Keyword::Class => "class",
            Keyword::Close => "close",
            Keyword::Cluster => "cluster",
            Keyword::Coalesce => "coalesce",
            Keyword::Collate => "collate",
            Keyword::Collation => "collation",
            Keyword::Column => "column",
            Keyword::Columns => "columns",
            Keyword::Comment => "comment",
            Keyword::Comments => "comments",
            Keyword::Commit => "commit",
            Keyword::Committed => "committed",
            Keyword::Compression => "compression",
            Keyword::Concurrently => "concurrently",
            Keyword::Configuration => "configuration",
            Keyword::Conflict => "conflict",
            Keyword::Connection => "connection",
            Keyword::Constraint => "constraint",
            Keyword::Constraints => "constraints",
            Keyword::Content => "content",
            Keyword::Continue => "continue",
            Keyword::Conversion => "conversion",
            Keyword::Copy => "copy",
            Keyword::Cost => "cost",
            Keyword::Create => "create",
            Keyword::Cross => "cross",
            Keyword::Csv => "csv",
            Keyword::Cube => "cube",
            Keyword::Current => "current",
            Keyword::CurrentCatalog => "current_catalog",
            Keyword::CurrentDate => "current_date",
            Keyword::CurrentRole => "current_role",
            Keyword::CurrentSchema => "current_schema",
            Keyword::CurrentTime => "current_time",
            Keyword::CurrentTimestamp => "current_timestamp",
            Keyword::CurrentUser => "current_user",
            Keyword::Cursor => "cursor",
            Keyword::Cycle => "cycle",
            Keyword::Data => "data",
            Keyword::Database => "database",
            Keyword::Day => "day",
            Keyword::Deallocate => "deallocate",
            Keyword::Dec => "dec",
            Keyword::Decimal => "decimal",
            Keyword::Declare => "declare",
            Keyword::Default => "default",
            Keyword::Defaults => "defaults",
            Keyword::Deferrable => "deferrable",
            Keyword::Deferred => "deferred",
            Keyword::Definer => "definer",
            Keyword::Delete => "delete",
            Keyword::Delimiter => "delimiter",
            Keyword::Delimiters => "delimiters",
            Keyword::Depends => "depends",
            Keyword::Depth => "depth",
            Keyword::Desc => "desc",
            Keyword::Detach => "detach",
            Keyword::Dictionary => "dictionary",
            Keyword::Disable => "disable",
            Keyword::Discard => "discard",
            Keyword::Distinct => "distinct",
            Keyword::Do => "do",
            Keyword::Document => "document",
            Keyword::Domain => "domain",
            Keyword::Double => "double",
            Keyword::Drop => "drop",
            Keyword::Each => "each",
            Keyword::Else => "else",
            Keyword::Enable => "enable",
            Keyword::Encoding => "encoding",
            Keyword::Encrypted => "encrypted",
            Keyword::End => "end",
            Keyword::Enum => "enum",
            Keyword::Escape => "escape",
            Keyword::Event => "event",
            Keyword::Except => "except",
            Keyword::Exclude => "exclude",
            Keyword::Excluding => "excluding",
            Keyword::Exclusive => "exclusive",
            Keyword::Execute => "execute",
            Keyword::Exists => "exists",
            Keyword::Explain => "explain",
            Keyword::Expression => "expression",
            Keyword::Extension => "extension",
            Keyword::External => "external",
            Keyword::Extract => "extract",
            Keyword::False => "false",
            Keyword::Family => "family",
            Keyword::Fetch => "fetch",
            Keyword::Filter => "filter",
            Keyword::Finalize => "finalize",
            Keyword::First => "first",
            Keyword::Float => "float",
            Keyword::Following => "following",
            Keyword::For => "for",
            Keyword::Force => "force",
            Keyword::Foreign => "foreign",
            Keyword::Format => "format",
            Keyword::Forward => "forward",
            Keyword::Freeze => "freeze",
            Keyword::From => "from",
            Keyword::Full => "full",
            Keyword::Function => "function",
            Keyword::Functions => "functions",
            Keyword::Generated => "generated",
            Keyword::Global => "global",
            Keyword::Grant => "grant",
            Keyword::Granted => "granted",
            Keyword::Greatest => "greatest",
            Keyword::Group => "group",
            Keyword::Grouping => "grouping",
            Keyword::Groups => "groups",
            Keyword::Handler => "handler",
            Keyword::Having => "having",
            Keyword::Header => "header",
            Keyword::Hold => "hold",
            Keyword::Hour => "hour",
            Keyword::Identity => "identity",
            Keyword::If => "if",
            Keyword::Ilike => "ilike",
            Keyword::Immediate => "immediate",
            Keyword::Immutable => "immutable",
            Keyword::Implicit => "implicit",
            Keyword::Import => "import",
            Keyword::In => "in",
            Keyword::Include => "include",
            Keyword::Including => "including",
            Keyword::Increment => "increment",
            Keyword::Indent => "indent",
            Keyword::Index => "index",
            Keyword::Indexes => "indexes",
            Keyword::Inherit => "inherit",
            Keyword::Inherits => "inherits",
            Keyword::Initially => "initially",
            Keyword::Inline => "inline",
            Keyword::Inner => "inner",
            Keyword::Inout => "inout",
            Keyword::Input => "input",
            Keyword::Insensitive => "insensitive",
            Keyword::Insert => "insert",
            Keyword::Instead => "instead",
            Keyword::Int => "int",
            Keyword::Integer => "integer",
            Keyword::Intersect => "intersect",
            Keyword::Interval => "interval",
            Keyword::Into => "into",
            Keyword::Invoker => "invoker",
            Keyword::Is => "is",
            Keyword::Isnull => "isnull",
            Keyword::Isolation => "isolation",
            Keyword::Join => "join",
            Keyword::Json => "json",
            Keyword::JsonArray => "json_array",
            Keyword::JsonArrayagg => "json_arrayagg",
            Keyword::JsonObject => "json_object",
            Keyword::JsonObjectagg => "json_objectagg",
            Keyword::Key => "key",
            Keyword::Keys => "keys",
            Keyword::Label => "label",
            Keyword::Language => "language",
            Keyword::Large => "large",
            Keyword::Last => "last",
            Keyword::Lateral => "lateral",
            Keyword::Leading => "leading",
            Keyword::Leakproof => "leakproof",
            Keyword::Least => "least",
            Keyword::Left => "left",
            Keyword::Level => "level",
            Keyword::Like => "like",
            Keyword::Limit => "limit",
            Keyword::Listen => "listen",
            Keyword::Load => "load",
            Keyword::Local => "local",
            Keyword::Localtime => "localtime",
            Keyword::Localtimestamp => "localtimestamp",
            Keyword::Location => "location",
            Keyword::Lock => "lock",
            Keyword::Locked => "locked",
            Keyword::Logged => "logged",
            Keyword::Mapping => "mapping",
            Keyword::Match => "match",
            Keyword::Matched => "matched",
            Keyword::Materialized => "materialized",
            Keyword::Maxvalue => "maxvalue",
            Keyword::Merge => "merge",
            Keyword::Method => "method",
            Keyword::Minute => "minute",
            Keyword::Minvalue => "minvalue",
            Keyword::Mode => "mode",
            Keyword::Month => "month",
            Keyword::Move => "move",
            Keyword::Name => "name",
            Keyword::Names => "names",
            Keyword::National => "national",
            Keyword::Natural => "natural",
            Keyword::Nchar => "nchar",
            Keyword::New => "new",
            Keyword::Next => "next",
            Keyword::Nfc => "nfc",
            Keyword::Nfd => "nfd",
            Keyword::Nfkc => "nfkc",
            Keyword::Nfkd => "nfkd",
            Keyword::No => "no",
            Keyword::None => "none",
            Keyword::Normalize => "normalize",
            Keyword::Normalized => "normalized",
            Keyword::Not => "not",
            Keyword::Nothing => "nothing",
            Keyword::Notify => "notify",
            Keyword::Notnull => "notnull",
            Keyword::Nowait => "nowait",
            Keyword::Null => "null",
            Keyword::Nullif => "nullif",
            Keyword::Nulls => "nulls",
            Keyword::Numeric => "numeric",
            Keyword::Object => "object",
            Keyword::Of => "of",
            Keyword::Off => "off",
            Keyword::Offset => "offset",
            Keyword::Oids => "oids",
            Keyword::Old => "old",
            Keyword::On => "on",
            Keyword::Only => "only",
            Keyword::Operator => "operator",
            Keyword::Option => "option",
            Keyword::Options => "options",
            Keyword::Or => "or",
            Keyword::Order => "order",
            Keyword::Ordinality => "ordinality",
            Keyword::Others => "others",
            Keyword::Out => "out",
            Keyword::Outer => "outer",
            Keyword::Over => "over",
            Keyword::Overlaps => "overlaps",
            Keyword::Overlay => "overlay",
            Keyword::Overriding => "overriding",
            Keyword::Owned => "owned",
            Keyword::Owner => "owner",
            Keyword::Parallel => "parallel",
            Keyword::Parameter => "parameter",
            Keyword::Parser => "parser",
            Keyword::Partial => "partial",
            Keyword::Partition => "partition",
            Keyword::Passing => "passing",
            Keyword::Password => "password",
            Keyword::Path => "path",
            Keyword::Placing => "placing",
            Keyword::Plans => "plans",
            Keyword::Policy => "policy",
            Keyword::Position => "position",
            Keyword::Preceding => "preceding",
            Keyword::Precision => "precision",
            Keyword::Prepare => "prepare",
            Keyword::Prepared => "prepared",
            Keyword::Preserve => "preserve",
            Keyword::Primary => "primary",
            Keyword::Prior => "prior",
            Keyword::Privileges => "privileges",
            Keyword::Procedural => "procedural",
            Keyword::Procedure => "procedure",
            Keyword::Procedures => "procedures",
            Keyword::Program => "program",
            Keyword::Publication => "publication",
            Keyword::Quote => "quote",
            Keyword::Range => "range",
            Keyword::Read => "read",
            Keyword::Real => "real",
            Keyword::Reassign => "reassign",
            Keyword::Recheck => "recheck",
            Keyword::Recursive => "recursive",
            Keyword::Ref => "ref",
            Keyword::References => "references",
            Keyword::Referencing => "referencing",
            Keyword::Refresh => "refresh",
            Keyword::Reindex => "reindex",
            Keyword::Relative => "relative",
            Keyword::Release => "release",
            Keyword::Rename => "rename",
            Keyword::Repeatable => "repeatable",
            Keyword::Replace => "replace",
            Keyword::Replica => "replica",
            Keyword::Reset => "reset",
            Keyword::Restart => "restart",
            Keyword::Restrict => "restrict",
            Keyword::Return => "return",
            Keyword::Returning => "returning",
            Keyword::Returns => "returns",
            Keyword::Revoke => "revoke",
            Keyword::Right => "right",
            Keyword::Role => "role",
            Keyword::Rollback => "rollback",
            Keyword::Rollup => "rollup",
            Keyword::Routine => "routine",
            Keyword::Routines => "routines",
            Keyword::Row => "row",
            Keyword::Rows => "rows",
            Keyword::Rule => "rule",
            Keyword::Savepoint => "savepoint",
            Keyword::Scalar => "scalar",
            Keyword::Schema => "schema",
            Keyword::Schemas => "schemas",
            Keyword::Scroll => "scroll",
            Keyword::Search => "search",
            Keyword::Second => "second",
            Keyword::Security => "security",
            Keyword::Select => "select",
            Keyword::Sequence => "sequence",
            Keyword::Sequences => "sequences",
            Keyword::Serializable => "serializable",
            Keyword::Server => "server",
            Keyword::Session => "session",
            Keyword::SessionUser => "session_user",
            Keyword::Set => "set",
            Keyword::Setof => "setof",
            Keyword::Sets => "sets",
            Keyword::Share => "share",
            Keyword::Show => "show",
            Keyword::Similar => "similar",
            Keyword::Simple => "simple",
            Keyword::Skip => "skip",
            Keyword::Smallint => "smallint",
            Keyword::Snapshot => "snapshot",
            Keyword::Some => "some",
            Keyword::Sql => "sql",
            Keyword::Stable => "stable",
            Keyword::Standalone => "standalone",
            Keyword::Start => "start",
            Keyword::Statement => "statement",
            Keyword::Statistics => "statistics",
            Keyword::Stdin => "stdin",
            Keyword::Stdout => "stdout",
            Keyword::Storage => "storage",
            Keyword::Stored => "stored",
            Keyword::Strict => "strict",
            Keyword::Strip => "strip",
            Keyword::Subscription => "subscription",
            Keyword::Substring => "substring",
            Keyword::Support => "support",
            Keyword::Symmetric => "symmetric",
            Keyword::Sysid => "sysid",
            Keyword::System => "system",
            Keyword::SystemUser => "system_user",
            Keyword::Table => "table",
            Keyword::Tables => "tables",
            Keyword::Tablesample => "tablesample",
            Keyword::Tablespace => "tablespace",
            Keyword::Temp => "temp",
            Keyword::Template => "template",
            Keyword::Temporary => "temporary",
            Keyword::Text => "text",
            Keyword::Then => "then",
            Keyword::Ties => "ties",
            Keyword::Time => "time",
            Keyword::Timestamp => "timestamp",
            Keyword::To => "to",
            Keyword::Trailing => "trailing",
            Keyword::Transaction => "transaction",
            Keyword::Transform => "transform",
            Keyword::Treat => "treat",
            Keyword::Trigger => "trigger",
            Keyword::Trim => "trim",
            Keyword::True => "true",
            Keyword::Truncate => "truncate",
            Keyword::Trusted => "trusted",
            Keyword::Type => "type",
            Keyword::Types => "types",
            Keyword::Uescape => "uescape",
            Keyword::Unbounded => "unbounded",
            Keyword::Uncommitted => "uncommitted",
            Keyword::Unencrypted => "unencrypted",
            Keyword::Union => "union",
            Keyword::Unique => "unique",
            Keyword::Unknown => "unknown",
            Keyword::Unlisten => "unlisten",
            Keyword::Unlogged => "unlogged",
            Keyword::Until => "until",
            Keyword::Update => "update",
            Keyword::User => "user",
            Keyword::Using => "using",
            Keyword::Vacuum => "vacuum",
            Keyword::Valid => "valid",
            Keyword::Validate => "validate",
            Keyword::Validator => "validator",
            Keyword::Value => "value",
            Keyword::Values => "values",
            Keyword::Varchar => "varchar",
            Keyword::Variadic => "variadic",
            Keyword::Varying => "varying",
            Keyword::Verbose => "verbose",
            Keyword::Version => "version",
            Keyword::View => "view",
            Keyword::Views => "views",
            Keyword::Volatile => "volatile",
            Keyword::When => "when",
            Keyword::Where => "where",
            Keyword::Whitespace => "whitespace",
            Keyword::Window => "window",
            Keyword::With => "with",
            Keyword::Within => "within",
            Keyword::Without => "without",
            Keyword::Work => "work",
            Keyword::Wrapper => "wrapper",
            Keyword::Write => "write",
            Keyword::Xml => "xml",
            Keyword::Xmlattributes => "xmlattributes",
            Keyword::Xmlconcat => "xmlconcat",
            Keyword::Xmlelement => "xmlelement",
            Keyword::Xmlexists => "xmlexists",
            Keyword::Xmlforest => "xmlforest",
            Keyword::Xmlnamespaces => "xmlnamespaces",
            Keyword::Xmlparse => "xmlparse",
            Keyword::Xmlpi => "xmlpi",
            Keyword::Xmlroot => "xmlroot",
            Keyword::Xmlserialize => "xmlserialize",
            Keyword::Xmltable => "xmltable",
            Keyword::Year => "year",
            Keyword::Yes => "yes",
            Keyword::Zone => "zone",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_resolves_known_keywords() {
        assert_eq!(Keyword::lookup("select"), Some(Keyword::Select));
        assert_eq!(Keyword::lookup("between"), Some(Keyword::Between));
        assert_eq!(Keyword::lookup("not_a_keyword"), None);
        assert_eq!(Keyword::lookup("SELECT"), None, "lookup expects folded text");
    }

    #[test]
    fn categories_match_server_grammar() {
        assert_eq!(Keyword::Select.category(), KeywordCategory::Reserved);
        assert_eq!(Keyword::Between.category(), KeywordCategory::ColName);
        assert_eq!(Keyword::Binary.category(), KeywordCategory::TypeFuncName);
        assert_eq!(Keyword::Abort.category(), KeywordCategory::Unreserved);
    }

    #[test]
    fn xmltable_clause_words_are_unreserved() {
        assert_eq!(Keyword::lookup("path"), Some(Keyword::Path));
        assert_eq!(Keyword::Path.category(), KeywordCategory::Unreserved);
        assert!(Keyword::Path.can_be_bare_label());
        assert_eq!(Keyword::lookup("passing"), Some(Keyword::Passing));
        assert_eq!(Keyword::lookup("columns"), Some(Keyword::Columns));
    }

    #[test]
    fn bare_label_flags() {
        assert!(Keyword::Abort.can_be_bare_label());
        assert!(Keyword::All.can_be_bare_label());
        assert!(!Keyword::As.can_be_bare_label());
        assert!(!Keyword::Filter.can_be_bare_label());
        assert!(!Keyword::Precision.can_be_bare_label());
    }

    #[test]
    fn spelling_round_trips_through_lookup() {
        assert_eq!(Keyword::lookup(Keyword::Overlaps.as_str()), Some(Keyword::Overlaps));
        assert_eq!(Keyword::CurrentTimestamp.as_str(), "current_timestamp");
    }
}