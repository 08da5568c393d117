pub mod core;
pub mod analysis;
pub mod index;
pub mod search;

/*
┌──────────────────────────────────────────────────────────────────────────┐
│                         FUZZDEX STRUCT ARCHITECTURE                      │
└──────────────────────────────────────────────────────────────────────────┘

┌────────────────────────────── CORE LAYER ────────────────────────────────┐
│                                                                          │
│  ┌────────────────────────────────────────────────────────────────────┐  │
│  │                       struct SearchEngine                          │  │
│  │  ┌──────────────────────────────────────────────────────────────┐  │  │
│  │  │ config: SearchConfig          // confidence + stage toggles  │  │  │
│  │  │ index: InvertedIndex          // token → documents           │  │  │
│  │  │ tokenizer: StandardTokenizer  // raw query → token set       │  │  │
│  │  │ expander: QueryExpander       // stemming/synonyms/drops     │  │  │
│  │  └──────────────────────────────────────────────────────────────┘  │  │
│  └────────────────────────────────────────────────────────────────────┘  │
│                                                                          │
│  ┌──────────────────────┐  ┌──────────────────────┐  ┌────────────────┐  │
│  │ struct DocId(u64)    │  │ struct Error         │  │ struct         │  │
│  │ type ForwardIndex    │  │ • kind: ErrorKind    │  │ IndexStats     │  │
│  │ type Thesaurus       │  │ • context: String    │  └────────────────┘  │
│  │ type SupplementTable │  └──────────────────────┘                      │
│  │ type DropList        │                                                │
│  └──────────────────────┘                                                │
└──────────────────────────────────────────────────────────────────────────┘

┌──────────────────────────── ANALYSIS LAYER ──────────────────────────────┐
│                                                                          │
│  ┌──────────────────────┐  ┌──────────────────────┐  ┌────────────────┐  │
│  │ trait Tokenizer      │  │ trait QueryStage     │  │ struct         │  │
│  │ • tokenize()         │  │ • expand()           │  │ QueryExpander  │  │
│  │ StandardTokenizer    │  │ RootWords            │  │ • stages: Vec  │  │
│  │ • punctuation regex  │  │ Synonyms             │  │ • expand()     │  │
│  │ • whitespace regex   │  │ Supplements          │  └────────────────┘  │
│  └──────────────────────┘  │ DropWords (last)     │                      │
│                            └──────────────────────┘                      │
└──────────────────────────────────────────────────────────────────────────┘

┌───────────────────────── INDEX / SEARCH LAYERS ──────────────────────────┐
│                                                                          │
│  ┌────────────────────────────────┐  ┌────────────────────────────────┐  │
│  │ struct InvertedIndex           │  │ fn similarity(a, b) → [0,100]  │  │
│  │ • postings: BTreeMap<          │  │ fn select_search_tokens()      │  │
│  │     String, Vec<DocId>>       │  │ fn search() → SearchResults    │  │
│  │ • build()/add()/remove()       │  │ struct ScoredDocument          │  │
│  │ • tokens()/wordlist()          │  │ • doc_id, score, matches       │  │
│  └────────────────────────────────┘  └────────────────────────────────┘  │
└──────────────────────────────────────────────────────────────────────────┘

┌──────────────────────────── RELATIONSHIPS ───────────────────────────────┐
│                                                                          │
│  SearchEngine ──owns──> InvertedIndex <──reads── search()                │
│       │                                                                  │
│       ├──owns──> StandardTokenizer ──feeds──> QueryExpander              │
│       │                                                                  │
│       └──query()──> tokenize → expand → select_search_tokens → search    │
│                                              │                           │
│                                              └──uses──> similarity()     │
│                                                                          │
│  InvertedIndex::build/add/remove <──driven by── ForwardIndex (caller's)  │
└──────────────────────────────────────────────────────────────────────────┘
*/
