//! Reserved Oracle keyword table.
//!
//! A fixed, process-wide set of reserved words. The resolver consults it to
//! decide whether a bare token should be rendered upper-cased instead of
//! being quoted as an identifier. Membership is case-insensitive.

/// Reserved keywords, ASCII-sorted so lookups can binary search.
pub const RESERVED: &[&str] = &[
    "ABORT", "ACCEPT", "ACCESS", "ADD", "ADMIN", "AFTER", "ALL", "ALLOCATE", "ALTER",
    "ANALYZE", "AND", "ANY", "ARCHIVE", "ARCHIVELOG", "ARRAY", "ARRAYLEN", "AS", "ASC",
    "ASSERT", "ASSIGN", "AT", "AUDIT", "AUTHORIZATION", "AVG", "BACKUP", "BASE_TABLE",
    "BECOME", "BEFORE", "BEGIN", "BETWEEN", "BINARY_INTEGER", "BLOCK", "BODY", "BOOLEAN", "BY",
    "CACHE", "CANCEL", "CASCADE", "CASE", "CHANGE", "CHAR", "CHARACTER", "CHAR_BASE", "CHECK",
    "CHECKPOINT", "CLOSE", "CLUSTER", "CLUSTERS", "COBOL", "COLAUTH", "COLUMN", "COLUMNS",
    "COMMENT", "COMMIT", "COMPILE", "COMPRESS", "CONNECT", "CONSTANT", "CONSTRAINT",
    "CONSTRAINTS", "CONTENTS", "CONTINUE", "CONTROLFILE", "COUNT", "CRASH", "CREATE",
    "CURRENT", "CURRVAL", "CURSOR", "CYCLE", "DATABASE", "DATAFILE", "DATA_BASE", "DATE",
    "DAY", "DBA", "DEBUGOFF", "DEBUGON", "DEC", "DECIMAL", "DECLARE", "DEFAULT", "DEFINITION",
    "DELAY", "DELETE", "DELTA", "DESC", "DIGITS", "DISABLE", "DISMOUNT", "DISPOSE", "DISTINCT",
    "DO", "DOUBLE", "DROP", "DUMP", "EACH", "ELSE", "ELSIF", "ENABLE", "END", "ENTRY",
    "ESCAPE", "EVENTS", "EXCEPT", "EXCEPTION", "EXCEPTIONS", "EXCEPTION_INIT", "EXCLUSIVE",
    "EXEC", "EXECUTE", "EXISTS", "EXIT", "EXPLAIN", "EXTENT", "EXTERNALLY", "FALSE", "FETCH",
    "FILE", "FLOAT", "FLUSH", "FOR", "FORCE", "FOREIGN", "FORM", "FORTRAN", "FOUND",
    "FREELIST", "FREELISTS", "FROM", "FUNCTION", "GENERIC", "GO", "GOTO", "GRANT", "GROUP",
    "GROUPS", "HAVING", "HOUR", "IDENTIFIED", "IF", "IMMEDIATE", "IN", "INCLUDING",
    "INCREMENT", "INDEX", "INDEXES", "INDICATOR", "INITIAL", "INITRANS", "INSERT", "INSTANCE",
    "INT", "INTEGER", "INTERSECT", "INTERVAL", "INTO", "IS", "KEY", "LANGUAGE", "LAYER",
    "LEVEL", "LIKE", "LIMITED", "LINK", "LISTS", "LOCK", "LOGFILE", "LONG", "LOOP", "MANAGE",
    "MANUAL", "MAX", "MAXDATAFILES", "MAXEXTENTS", "MAXINSTANCES", "MAXLOGFILES",
    "MAXLOGHISTORY", "MAXLOGMEMBERS", "MAXTRANS", "MAXVALUE", "MIN", "MINEXTENTS", "MINUS",
    "MINUTE", "MINVALUE", "MLSLABEL", "MOD", "MODE", "MODIFY", "MODULE", "MONTH", "MOUNT",
    "NATURAL", "NEW", "NEXT", "NEXTVAL", "NOARCHIVELOG", "NOAUDIT", "NOCACHE", "NOCOMPRESS",
    "NOCYCLE", "NOMAXVALUE", "NOMINVALUE", "NONE", "NOORDER", "NORESETLOGS", "NORMAL",
    "NOSORT", "NOT", "NOTFOUND", "NOWAIT", "NULL", "NUMBER", "NUMBER_BASE", "NUMERIC", "OF",
    "OFF", "OFFLINE", "OLD", "ON", "ONLINE", "ONLY", "OPEN", "OPTIMAL", "OPTION", "OR",
    "ORDER", "OTHERS", "OUT", "OWN", "PACKAGE", "PARALLEL", "PARTITION", "PCTFREE",
    "PCTINCREASE", "PCTUSED", "PLAN", "PLI", "POSITIVE", "PRAGMA", "PRECISION", "PRIMARY",
    "PRIOR", "PRIVATE", "PRIVILEGES", "PROCEDURE", "PROFILE", "PUBLIC", "QUOTA", "RAISE",
    "RANGE", "RAW", "READ", "REAL", "RECORD", "RECOVER", "REFERENCES", "REFERENCING",
    "RELEASE", "REMR", "RENAME", "RESETLOGS", "RESOURCE", "RESTRICTED", "RETURN", "REUSE",
    "REVERSE", "REVOKE", "ROLE", "ROLES", "ROLLBACK", "ROW", "ROWID", "ROWLABEL", "ROWNUM",
    "ROWS", "ROWTYPE", "RUN", "SAVEPOINT", "SCHEMA", "SCN", "SECOND", "SECTION", "SEGMENT",
    "SELECT", "SEPARATE", "SEQUENCE", "SESSION", "SET", "SHARE", "SHARED", "SIZE", "SMALLINT",
    "SNAPSHOT", "SOME", "SORT", "SPACE", "SQL", "SQLBUF", "SQLCODE", "SQLERRM", "SQLERROR",
    "SQLSTATE", "START", "STATEMENT", "STATEMENT_ID", "STATISTICS", "STDDEV", "STOP",
    "STORAGE", "SUBTYPE", "SUCCESSFUL", "SUM", "SWITCH", "SYNONYM", "SYSDATE", "SYSTEM",
    "TABAUTH", "TABLE", "TABLES", "TABLESPACE", "TASK", "TEMPORARY", "TERMINATE", "THEN",
    "THREAD", "TIME", "TO", "TRACING", "TRANSACTION", "TRIGGER", "TRIGGERS", "TRUE",
    "TRUNCATE", "TYPE", "UID", "UNDER", "UNION", "UNIQUE", "UNLIMITED", "UNTIL", "UPDATE",
    "USE", "USER", "USING", "VALIDATE", "VALUES", "VARCHAR", "VARCHAR2", "VARIANCE", "VIEW",
    "VIEWS", "WHEN", "WHENEVER", "WHERE", "WHILE", "WITH", "WORK", "WRITE", "XOR", "YEAR",
];

/// Case-insensitive membership test against [`RESERVED`].
pub fn is_reserved(token: &str) -> bool {
    let upper = token.to_ascii_uppercase();
    RESERVED.binary_search(&upper.as_str()).is_ok()
}
